//! Volume data structures for voltex.
//!
//! This crate provides the two data types that cross the renderer
//! boundary:
//! - [`Volume`] - an immutable 3D RGBA texture with trilinear sampling
//! - [`Frame`] - the 2D RGBA image a render call produces

// Graphics code intentionally uses casts for indices, colors, and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

pub mod frame;
pub mod volume;

pub use frame::{Frame, ImageOrigin};
pub use volume::Volume;
