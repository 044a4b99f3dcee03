//! Core foundations for voltex.
//!
//! This crate provides the types shared across the voltex workspace:
//! - [`VoltexError`] / [`Result`] - the error taxonomy surfaced to hosts
//! - [`RenderSettings`] and [`SampleQuality`] - per-render configuration

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod settings;

pub use error::{Result, VoltexError};
pub use settings::{RenderSettings, SampleQuality, MAX_DENSITY};

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, UVec3, Vec2, Vec3, Vec4};
