//! 3D texture data with trilinear sampling.

use glam::{UVec3, Vec3, Vec4};
use voltex_core::{Result, VoltexError};

/// Overshoot tolerance for sampling coordinates just outside [0,1]³.
///
/// Rays are generated against the cube faces, so float error can push a
/// sample position marginally outside the unit range; within this band the
/// lookup clamps to the face texels, beyond it the sample is transparent.
const EDGE_TOLERANCE: f32 = 1e-4;

/// An immutable 3D grid of RGBA texels addressed by normalized coordinates.
///
/// Texels are stored row-major (x fastest, then y, then z) and addressed
/// for sampling by coordinates in [0,1]³. Texel centers sit at
/// `(i + 0.5) / extent` along each axis, with clamp-to-edge filtering at
/// the faces.
#[derive(Debug)]
pub struct Volume {
    dim: UVec3,
    texels: Vec<Vec4>,
}

impl Volume {
    /// Creates a volume from raw texel data.
    ///
    /// Fails with [`VoltexError::ZeroDimension`] if any dimension is zero,
    /// or [`VoltexError::SizeMismatch`] if the texel count does not match
    /// the dimensions.
    pub fn new(dim: UVec3, texels: Vec<Vec4>) -> Result<Self> {
        if dim.x == 0 || dim.y == 0 || dim.z == 0 {
            return Err(VoltexError::ZeroDimension(dim.x, dim.y, dim.z));
        }
        let expected = dim.x as usize * dim.y as usize * dim.z as usize;
        if texels.len() != expected {
            return Err(VoltexError::SizeMismatch {
                expected,
                actual: texels.len(),
            });
        }
        Ok(Self { dim, texels })
    }

    /// Creates a volume by evaluating `f` at every texel index.
    pub fn from_fn(dim: UVec3, mut f: impl FnMut(UVec3) -> Vec4) -> Result<Self> {
        if dim.x == 0 || dim.y == 0 || dim.z == 0 {
            return Err(VoltexError::ZeroDimension(dim.x, dim.y, dim.z));
        }
        let mut texels = Vec::with_capacity(dim.x as usize * dim.y as usize * dim.z as usize);
        for z in 0..dim.z {
            for y in 0..dim.y {
                for x in 0..dim.x {
                    texels.push(f(UVec3::new(x, y, z)));
                }
            }
        }
        Ok(Self { dim, texels })
    }

    /// Creates a volume filled with a single color.
    pub fn solid(dim: UVec3, color: Vec4) -> Result<Self> {
        Self::from_fn(dim, |_| color)
    }

    /// Returns the number of texels in each dimension.
    #[must_use]
    pub fn dim(&self) -> UVec3 {
        self.dim
    }

    /// Returns the total number of texels.
    #[must_use]
    pub fn num_texels(&self) -> usize {
        self.texels.len()
    }

    /// Returns the raw texel data.
    #[must_use]
    pub fn texels(&self) -> &[Vec4] {
        &self.texels
    }

    /// Flattens a 3D texel index to a linear index.
    #[must_use]
    pub fn flatten_index(&self, x: u32, y: u32, z: u32) -> usize {
        x as usize + (y as usize * self.dim.x as usize) + (z as usize * self.dim.x as usize * self.dim.y as usize)
    }

    /// Returns the texel at the given 3D index.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn texel(&self, x: u32, y: u32, z: u32) -> Vec4 {
        self.texels[self.flatten_index(x, y, z)]
    }

    /// Samples the volume at a normalized coordinate with trilinear filtering.
    ///
    /// Coordinates outside [0,1]³ beyond a small float-overshoot tolerance
    /// return fully transparent black; overshoot within the tolerance
    /// clamps to the face texels. Never faults.
    #[must_use]
    pub fn sample(&self, uvw: Vec3) -> Vec4 {
        if uvw.cmplt(Vec3::splat(-EDGE_TOLERANCE)).any()
            || uvw.cmpgt(Vec3::splat(1.0 + EDGE_TOLERANCE)).any()
        {
            return Vec4::ZERO;
        }
        let uvw = uvw.clamp(Vec3::ZERO, Vec3::ONE);

        // Texel centers sit at (i + 0.5) / extent.
        let pos = uvw * self.dim.as_vec3() - Vec3::splat(0.5);
        let (x0, x1, tx) = Self::axis_indices(pos.x, self.dim.x);
        let (y0, y1, ty) = Self::axis_indices(pos.y, self.dim.y);
        let (z0, z1, tz) = Self::axis_indices(pos.z, self.dim.z);

        let c000 = self.texel(x0, y0, z0);
        let c100 = self.texel(x1, y0, z0);
        let c010 = self.texel(x0, y1, z0);
        let c110 = self.texel(x1, y1, z0);
        let c001 = self.texel(x0, y0, z1);
        let c101 = self.texel(x1, y0, z1);
        let c011 = self.texel(x0, y1, z1);
        let c111 = self.texel(x1, y1, z1);

        let c00 = c000.lerp(c100, tx);
        let c10 = c010.lerp(c110, tx);
        let c01 = c001.lerp(c101, tx);
        let c11 = c011.lerp(c111, tx);
        let c0 = c00.lerp(c10, ty);
        let c1 = c01.lerp(c11, ty);
        c0.lerp(c1, tz)
    }

    /// Splits a texel-space coordinate into the two bracketing indices and
    /// the interpolation weight, clamping to the edge texels.
    fn axis_indices(p: f32, extent: u32) -> (u32, u32, f32) {
        let hi = (extent - 1) as f32;
        let base = p.floor();
        let t = p - base;
        let i0 = base.clamp(0.0, hi) as u32;
        let i1 = (base + 1.0).clamp(0.0, hi) as u32;
        (i0, i1, t)
    }
}
