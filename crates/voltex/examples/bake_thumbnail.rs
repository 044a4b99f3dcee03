//! Bakes a static thumbnail of a procedural smoke-puff volume to PNG,
//! the way an asset browser would populate its cache.

use voltex::*;

fn main() -> Result<()> {
    env_logger::init();

    // Spherical density falloff around the volume center.
    let dim = UVec3::splat(32);
    let volume = Volume::from_fn(dim, |i| {
        let p = (i.as_vec3() + Vec3::splat(0.5)) / dim.as_vec3();
        let d = (p - Vec3::splat(0.5)).length() * 2.0;
        let falloff = (1.0 - d).clamp(0.0, 1.0);
        Vec4::new(0.9, 0.85, 0.8, falloff * falloff)
    })?;

    let session = PreviewSession::new();
    let renderer = PreviewRenderer::new();

    let frame = session.render_thumbnail(&renderer, &volume, 128, 128);
    save_image("thumbnail.png", &frame).expect("failed to write thumbnail.png");
    println!("wrote thumbnail.png");
    Ok(())
}
