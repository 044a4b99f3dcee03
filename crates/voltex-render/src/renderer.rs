//! Frame renderer orchestrating camera, volume, and compositor.

use glam::{Mat4, Vec3, Vec4};
use voltex_core::RenderSettings;
use voltex_volume::{Frame, Volume};

use crate::camera::{OrbitAngle, OrbitCamera};
use crate::raymarch::{composite, intersect_cube, Ray};

/// An explicitly owned rendering context.
///
/// Each preview instance owns (or borrows) a `PreviewRenderer`; instances
/// share no state, so interleaved renders from different previews cannot
/// interfere. Rendering is synchronous and single-threaded: one call per
/// host repaint, completing before it returns.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRenderer {
    /// Color composited behind the volume. Transparent by default, so the
    /// host's own background shows through.
    pub background: Vec4,
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewRenderer {
    /// Creates a renderer with a transparent background.
    #[must_use]
    pub fn new() -> Self {
        Self {
            background: Vec4::ZERO,
        }
    }

    /// Creates a renderer compositing over an opaque background color.
    #[must_use]
    pub fn with_background(background: Vec4) -> Self {
        Self { background }
    }

    /// Renders one frame of the volume at the given orbit angle.
    ///
    /// A pure function of its inputs: repeated calls with identical
    /// arguments produce byte-identical frames, and neither the volume nor
    /// any shared state is mutated. Interactive previews and one-shot
    /// thumbnails both go through this single code path.
    ///
    /// A zero `width` or `height` yields an empty frame; a non-positive
    /// camera distance degenerates to a view from inside the cube. Neither
    /// panics.
    #[must_use]
    pub fn render(
        &self,
        volume: &Volume,
        angle: OrbitAngle,
        settings: &RenderSettings,
        width: u32,
        height: u32,
    ) -> Frame {
        if width == 0 || height == 0 {
            return Frame::empty();
        }
        let start = std::time::Instant::now();

        let camera = OrbitCamera::build_view(angle, settings.distance, settings.fov_degrees);
        let aspect_ratio = width as f32 / height as f32;
        let inv_view_proj = camera.view_projection_matrix(aspect_ratio).inverse();
        let samples = settings.quality.samples();

        let mut frame = Frame::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let ray = pixel_ray(&camera, &inv_view_proj, x, y, width, height);
                let color = match intersect_cube(&ray) {
                    Some(span) => composite(volume, &ray, span, samples, settings.density),
                    None => Vec4::ZERO,
                };
                frame.set_pixel(x, y, over(color, self.background));
            }
        }

        log::debug!(
            "rendered {width}x{height} preview ({samples} samples) in {:?}",
            start.elapsed()
        );
        frame
    }
}

/// Builds the primary ray through the center of pixel (x, y).
fn pixel_ray(
    camera: &OrbitCamera,
    inv_view_proj: &Mat4,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Ray {
    let ndc_x = ((x as f32 + 0.5) / width as f32) * 2.0 - 1.0;
    let ndc_y = 1.0 - ((y as f32 + 0.5) / height as f32) * 2.0;
    let target = inv_view_proj.project_point3(Vec3::new(ndc_x, ndc_y, 0.5));
    Ray {
        origin: camera.position,
        dir: (target - camera.position).normalize(),
    }
}

/// Composites `front` over `back` with the standard "over" operator.
fn over(front: Vec4, back: Vec4) -> Vec4 {
    front + back * (1.0 - front.w)
}
