//! Ray/cube intersection and front-to-back alpha compositing.
//!
//! The preview subject is always the unit cube centered at the origin;
//! rays march from their entry point on the cube to their exit point in
//! `samples` equal steps, compositing volume samples front to back.

use glam::{Vec3, Vec4};
use voltex_volume::Volume;

/// Half extent of the preview cube (a unit cube centered at the origin).
pub const CUBE_HALF_EXTENT: f32 = 0.5;

/// Accumulated alpha past which marching stops early.
const SATURATION_CUTOFF: f32 = 0.995;

/// A ray with origin and normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin in world space.
    pub origin: Vec3,
    /// Normalized ray direction.
    pub dir: Vec3,
}

/// Entry and exit distances of a ray crossing the preview cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// Distance along the ray where it enters the cube (≥ 0).
    pub entry: f32,
    /// Distance along the ray where it leaves the cube.
    pub exit: f32,
}

impl Span {
    /// Length of the traversal through the cube.
    #[must_use]
    pub fn length(self) -> f32 {
        self.exit - self.entry
    }
}

/// Intersects a ray with the preview cube using the slab method.
///
/// Returns `None` when the ray misses the cube or the cube lies entirely
/// behind the origin. For rays starting inside the cube the entry distance
/// clamps to zero.
#[must_use]
pub fn intersect_cube(ray: &Ray) -> Option<Span> {
    let inv = ray.dir.recip();
    let t0 = (Vec3::splat(-CUBE_HALF_EXTENT) - ray.origin) * inv;
    let t1 = (Vec3::splat(CUBE_HALF_EXTENT) - ray.origin) * inv;

    let entry = t0.min(t1).max_element().max(0.0);
    let exit = t0.max(t1).min_element();
    if exit > entry {
        Some(Span { entry, exit })
    } else {
        None
    }
}

/// Marches a ray span through the volume, compositing front to back.
///
/// The span is divided into `samples` equal steps, sampling the volume at
/// each step midpoint. Sampled alpha is scaled by `density` (saturating to
/// [0,1]) and accumulated with the standard "over" operator; marching
/// stops early once the accumulator saturates. The returned alpha need not
/// reach 1; the background shows through thin volumes.
///
/// Low sample counts produce visible banding; that is the quality tier
/// trade-off exposed to the caller, not a defect.
#[must_use]
pub fn composite(volume: &Volume, ray: &Ray, span: Span, samples: u32, density: f32) -> Vec4 {
    let mut accum = Vec4::ZERO;
    if samples == 0 || span.length() <= 0.0 {
        return accum;
    }

    let step = span.length() / samples as f32;
    for i in 0..samples {
        let t = span.entry + (i as f32 + 0.5) * step;
        let position = ray.origin + ray.dir * t;
        let texel = volume.sample(position + Vec3::splat(CUBE_HALF_EXTENT));

        let alpha = (texel.w * density).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            continue;
        }

        let weight = alpha * (1.0 - accum.w);
        accum += Vec4::new(texel.x * weight, texel.y * weight, texel.z * weight, weight);
        if accum.w >= SATURATION_CUTOFF {
            break;
        }
    }
    accum
}
