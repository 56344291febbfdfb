//! Render-side support for rollpack-rs.
//!
//! This crate carries everything a host renderer needs besides the meshes
//! themselves:
//! - Camera and view management (turntable orbit, framing, pose read-out)
//! - Material definitions and registry for the roll surfaces
//! - Light rigs for the stock looks
//! - Procedural grain tiles
//! - Frame export to image files

// Tile generation converts pixel coordinates and shades through f32 throughout
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

pub mod camera;
pub mod export;
pub mod grain;
pub mod lights;
pub mod materials;

pub use camera::{Camera, CameraPose, CameraSpeeds};
pub use export::{encode_png, save_image, ExportError};
pub use grain::{
    end_print_tile, paper_bump_tile, paper_side_tile, GrainTile, END_PRINT_SIZE, GRAIN_TILE_SIZE,
};
pub use lights::{Light, LightKind, LightRig};
pub use materials::{Material, MaterialKind, MaterialRegistry, MaterialUniforms, SideMode};
