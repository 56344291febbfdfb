//! Core abstractions for rollpack-rs.
//!
//! This crate provides the fundamental types shared across rollpack-rs:
//! - [`RollSpec`] and [`PackSpec`] describing a single roll and a full pack
//! - [`RawPackParams`] sanitization from untrusted user input
//! - Named parameter [`Preset`]s and JSON round-tripping
//! - Viewer-facing [`ViewOptions`] and quality/lighting enums

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod options;
pub mod params;
pub mod presets;
pub mod units;

pub use error::{Result, RollpackError};
pub use options::{BackgroundMode, DetailLevel, LightingPreset, ViewOptions};
pub use params::{PackSpec, RawPackParams, RollSpec};
pub use presets::Preset;
pub use units::{mm, EPSILON, MM};

// Re-export glam types for convenience
pub use glam::{Mat4, Vec2, Vec3, Vec4};
