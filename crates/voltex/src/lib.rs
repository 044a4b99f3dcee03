//! voltex: a host-agnostic volumetric preview renderer for 3D textures.
//!
//! voltex produces interactive previews and static thumbnails of
//! volumetric data (3D RGBA textures) by raymarching a unit cube on the
//! CPU. A host UI (an inspector panel, an asset browser) owns widgets,
//! input events, and asset storage, and calls in here once per repaint or
//! once per thumbnail bake.
//!
//! # Quick Start
//!
//! ```
//! use voltex::*;
//!
//! fn main() -> Result<()> {
//!     // A small procedural volume standing in for a loaded asset.
//!     let volume = Volume::solid(UVec3::splat(8), Vec4::new(1.0, 0.5, 0.2, 0.1))?;
//!
//!     // The renderer context is explicitly owned - no global state.
//!     let renderer = PreviewRenderer::new();
//!     let mut session = PreviewSession::new();
//!
//!     // Orbit a little, then draw one preview frame.
//!     session.drag(Vec2::new(12.0, -4.0), Vec2::new(256.0, 256.0));
//!     let frame = session.render_preview(&renderer, &volume, 64, 64);
//!     assert_eq!(frame.width(), 64);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - A [`Volume`] is an immutable 3D RGBA texture sampled with trilinear
//!   filtering at normalized coordinates.
//! - A [`PreviewSession`] holds the per-widget editing state: the orbit
//!   angle driven by drag gestures, and the [`RenderSettings`] driven by
//!   the host's quality dropdown and density slider.
//! - A [`PreviewRenderer`] is an explicitly owned render context; every
//!   call is a pure function of (volume, angle, settings, size), so
//!   distinct preview instances never interfere.
//! - [`Frame`]s are handed to the caller to blit, or encoded to PNG via
//!   [`encode_png`]/[`save_image`] for thumbnail caches.
//!
//! Rendering is synchronous and single-threaded: each call completes
//! before returning control to the host's event loop.

pub mod asset;
pub mod session;

pub use asset::{expect_volume, PreviewAsset};
pub use session::{preview_size, PreviewSession, MAX_PREVIEW_SIZE};

// Re-export core types
pub use voltex_core::{
    error::{Result, VoltexError},
    settings::{RenderSettings, SampleQuality, MAX_DENSITY},
    Mat4, Quat, UVec3, Vec2, Vec3, Vec4,
};

// Re-export volume data structures
pub use voltex_volume::{Frame, ImageOrigin, Volume};

// Re-export render types
pub use voltex_render::{
    encode_png, fit_distance, save_image, OrbitAngle, OrbitCamera, OutputError, PreviewRenderer,
    BOUNDING_RADIUS, DEFAULT_ANGLE,
};
