//! Procedural geometry for rollpack-rs.
//!
//! This crate builds everything that ends up on screen:
//! - Triangle mesh buffers and lathe primitives (tubes, annuli, discs)
//! - Multi-part roll geometry at three detail levels
//! - Pack layout math and the engine that stamps rolls into a scene root

// Geometry code intentionally uses casts for indices, angles, and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

pub mod mesh;
pub mod pack;
pub mod primitives;
pub mod roll;
pub mod scene;

pub use mesh::{MeshBuffers, Vertex};
pub use pack::{PackEngine, PackLayout, PackSummary};
pub use primitives::Facing;
pub use roll::{BuilderConfig, PartKind, RollBuilder, RollGeometry, RollPart};
pub use scene::{PackRoot, RollInstance};
