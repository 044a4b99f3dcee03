//! Renders a turntable sequence of a checkered volume, one frame per 45°
//! of yaw, exercising the renderer directly without session state.

use voltex::*;

fn main() -> Result<()> {
    env_logger::init();

    let volume = Volume::from_fn(UVec3::splat(8), |i| {
        if (i.x / 2 + i.y / 2 + i.z / 2) % 2 == 0 {
            Vec4::new(0.9, 0.6, 0.2, 0.8)
        } else {
            Vec4::new(0.2, 0.4, 0.9, 0.3)
        }
    })?;

    let renderer = PreviewRenderer::new();
    let settings = RenderSettings::default();

    for step in 0..8u32 {
        let angle = OrbitAngle::new(step as f32 * 45.0, -22.5);
        let frame = renderer.render(&volume, angle, &settings, 96, 96);
        let filename = format!("turntable_{step}.png");
        save_image(&filename, &frame).expect("failed to write frame");
        println!("wrote {filename}");
    }
    Ok(())
}
