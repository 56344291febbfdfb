//! rollpack-rs: a parametric 3D visualizer core for packs of cylindrical rolls.
//!
//! Rollpack procedurally builds packs of wrapped paper rolls: one composite
//! roll solid, stamped across a centered lane x channel x layer grid. The
//! output is CPU-side mesh buffers, material and light definitions, and
//! camera matrices; turning those into pixels is the host renderer's job.
//!
//! # Quick Start
//!
//! ```
//! use rollpack::*;
//!
//! // A fresh viewer already holds the default 4 x 3 x 2 pack.
//! let mut viewer = Viewer::new();
//! assert_eq!(viewer.total(), 24);
//!
//! // Tighten the grid and regenerate.
//! let summary = viewer.set_params(&RawPackParams {
//!     lanes: 2.0,
//!     layers: 1.0,
//!     ..RawPackParams::default()
//! });
//! assert_eq!(summary.total, 6);
//!
//! // Hand the instances to a renderer.
//! for instance in viewer.root() {
//!     let _model = instance.transform();
//!     for part in instance.parts() {
//!         let _vertices = part.mesh.interleaved();
//!     }
//! }
//! ```
//!
//! # Architecture
//!
//! Rollpack is organized around two producers:
//!
//! - The **roll builder** turns a [`RollSpec`] into a multi-part solid: an
//!   outer shell, bevel or seam rings, paper end surfaces, and a cardboard
//!   core with an inward-facing bore wall.
//! - The **pack engine** turns a [`PackSpec`] into a centered grid of
//!   [`RollInstance`]s inside a caller-owned [`PackRoot`], sharing one roll
//!   geometry across the whole generation.
//!
//! Everything else supports the host renderer: [`Camera`] matrices,
//! [`Material`] and [`LightRig`] definitions, grain tiles, and image export.
//! [`Viewer`] bundles all of it into one session object.

pub mod export;
pub mod viewer;

// Re-export core types
pub use rollpack_core::{
    error::{Result, RollpackError},
    options::{BackgroundMode, DetailLevel, LightingPreset, ViewOptions},
    params::{PackSpec, RawPackParams, RollSpec},
    presets::Preset,
    units::{mm, EPSILON, MM},
    Mat4, Vec2, Vec3, Vec4,
};

// Re-export render types
pub use rollpack_render::{
    encode_png, save_image, Camera, CameraPose, CameraSpeeds, ExportError, GrainTile, Light,
    LightKind, LightRig, Material, MaterialKind, MaterialRegistry, MaterialUniforms, SideMode,
};

// Re-export geometry types
pub use rollpack_geometry::{
    BuilderConfig, Facing, MeshBuffers, PackEngine, PackLayout, PackRoot, PackSummary, PartKind,
    RollBuilder, RollGeometry, RollInstance, RollPart, Vertex,
};

pub use export::{dated_export_filename, export_filename};
pub use viewer::Viewer;

/// Generates a pack in one call, without holding a [`Viewer`].
///
/// Sanitizes `raw`, runs a default-configured engine, and returns the
/// populated root together with the generation summary.
#[must_use]
pub fn generate_pack(raw: &RawPackParams) -> (PackRoot, PackSummary) {
    let engine = PackEngine::new(BuilderConfig::default());
    let mut root = PackRoot::new();
    let summary = engine.generate(&raw.sanitize(), &mut root);
    (root, summary)
}
