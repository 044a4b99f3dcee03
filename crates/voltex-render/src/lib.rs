//! Rendering backend for voltex.
//!
//! This crate turns a [`voltex_volume::Volume`] into 2D frames:
//! - Orbit camera rig and primary-ray generation
//! - Ray/cube intersection and front-to-back alpha compositing
//! - The [`PreviewRenderer`] context object orchestrating a full frame
//! - Frame encoding/saving for thumbnail caches

// Graphics code intentionally uses casts for indices, colors, and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

pub mod camera;
pub mod output;
pub mod raymarch;
pub mod renderer;

pub use camera::{fit_distance, OrbitAngle, OrbitCamera, BOUNDING_RADIUS, DEFAULT_ANGLE};
pub use output::{encode_png, save_image, OutputError};
pub use raymarch::{composite, intersect_cube, Ray, Span, CUBE_HALF_EXTENT};
pub use renderer::PreviewRenderer;
