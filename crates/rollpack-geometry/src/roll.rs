//! Roll construction: one multi-part solid per roll.
//!
//! A roll is not a single mesh. Depending on the detail level it combines an
//! outer shell, bevel or seam rings, paper end surfaces, and a cardboard
//! core, each as its own part with its own material role. Parts carry only a
//! position offset from the roll origin; orientation is baked into each mesh
//! so instances never need per-part rotation.

use std::sync::Arc;

use glam::Vec3;
use rollpack_core::options::{DetailLevel, ViewOptions};
use rollpack_core::params::RollSpec;
use rollpack_core::units::EPSILON;
use rollpack_render::materials::MaterialKind;

use crate::mesh::MeshBuffers;
use crate::primitives::{annulus, disc, tube, Facing};

/// Depth of the end bevels (1 mm).
pub const BEVEL_DEPTH: f32 = 0.1;

/// Seam rings sit this factor proud of the shell.
pub const SEAM_RADIAL_RATIO: f32 = 1.01;

/// Axial thickness of a seam ring (0.4 mm).
pub const SEAM_THICKNESS: f32 = 0.04;

/// Seam ring centers are inset this far from the roll ends (1 mm).
pub const SEAM_END_INSET: f32 = 0.1;

/// The core tube is slightly shorter than the roll.
pub const CORE_LENGTH_RATIO: f32 = 0.97;

/// What a part of a roll represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    /// The wound paper side.
    OuterShell,
    /// Narrow ring softening a shell edge.
    BevelRing,
    /// Raised sheet seam near a roll end.
    SeamRing,
    /// Annular paper sheet closing an end.
    EndCap,
    /// Printed flat disc covering an entire end.
    EndDisc,
    /// Cardboard core side.
    CoreTube,
    /// Interior wall of the core bore.
    BoreTube,
    /// Disc plugging the open end of the core tube.
    HoleCap,
}

/// One sub-surface of a roll.
#[derive(Debug, Clone)]
pub struct RollPart {
    /// What this part represents.
    pub kind: PartKind,
    /// Shared, immutable mesh data.
    pub mesh: Arc<MeshBuffers>,
    /// Offset from the roll origin.
    pub offset: Vec3,
    /// Material role for shading.
    pub material: MaterialKind,
}

impl RollPart {
    fn new(kind: PartKind, mesh: MeshBuffers, x_offset: f32, material: MaterialKind) -> Self {
        Self::shared(kind, Arc::new(mesh), x_offset, material)
    }

    fn shared(
        kind: PartKind,
        mesh: Arc<MeshBuffers>,
        x_offset: f32,
        material: MaterialKind,
    ) -> Self {
        Self {
            kind,
            mesh,
            offset: Vec3::new(x_offset, 0.0, 0.0),
            material,
        }
    }
}

/// The complete geometry of one roll.
#[derive(Debug, Clone)]
pub struct RollGeometry {
    spec: RollSpec,
    detail: DetailLevel,
    parts: Vec<RollPart>,
}

impl RollGeometry {
    /// The roll spec actually built, after degenerate-core clamping.
    #[must_use]
    pub fn spec(&self) -> &RollSpec {
        &self.spec
    }

    /// Detail level this geometry was built at.
    #[must_use]
    pub fn detail(&self) -> DetailLevel {
        self.detail
    }

    /// All parts, in a fixed deterministic order.
    #[must_use]
    pub fn parts(&self) -> &[RollPart] {
        &self.parts
    }

    /// Number of parts.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Triangles drawn per instance of this roll.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.triangle_count()).sum()
    }

    /// Axis-aligned bounds over all parts, in the roll's local frame.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        parts_bounds(&self.parts)
    }
}

/// Folds part bounds (mesh bounds plus part offset) into one box.
pub(crate) fn parts_bounds(parts: &[RollPart]) -> Option<(Vec3, Vec3)> {
    let mut combined: Option<(Vec3, Vec3)> = None;
    for part in parts {
        if let Some((min, max)) = part.mesh.bounds() {
            let min = min + part.offset;
            let max = max + part.offset;
            combined = Some(match combined {
                Some((cmin, cmax)) => (cmin.min(min), cmax.max(max)),
                None => (min, max),
            });
        }
    }
    combined
}

/// Segment counts and detail level for roll construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Detail level to build at.
    pub detail: DetailLevel,
    /// Radial segments for the outer shell and end surfaces.
    pub shell_segments: u32,
    /// Radial segments for bevels, seams, and core tubes.
    pub detail_segments: u32,
}

impl BuilderConfig {
    /// Pulls the geometry-relevant settings out of viewer options.
    #[must_use]
    pub fn from_options(options: &ViewOptions) -> Self {
        Self {
            detail: options.detail,
            shell_segments: options.shell_segments,
            detail_segments: options.detail_segments,
        }
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::from_options(&ViewOptions::default())
    }
}

/// Builds [`RollGeometry`] from a [`RollSpec`].
///
/// Construction is a pure function of the spec and config: the same inputs
/// always produce identical buffers, offsets, and part order.
#[derive(Debug, Clone, Default)]
pub struct RollBuilder {
    config: BuilderConfig,
}

impl RollBuilder {
    /// Creates a builder with the given configuration.
    #[must_use]
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Builds the geometry for one roll.
    ///
    /// Does not validate the spec, but applies the same degenerate-core
    /// clamping as sanitization so a hand-built spec cannot produce a core
    /// outside the shell. Degenerate lengths yield degenerate but
    /// well-formed parts.
    #[must_use]
    pub fn build(&self, spec: &RollSpec) -> RollGeometry {
        let roll = spec.clamped();
        let parts = match self.config.detail {
            DetailLevel::FlatShell => self.build_flat_shell(&roll),
            DetailLevel::BumpTextured => self.build_bump_textured(&roll),
            DetailLevel::BeveledWithCoreBore => self.build_beveled(&roll),
        };
        log::debug!(
            "built roll ({:?}): {} parts, {} triangles",
            self.config.detail,
            parts.len(),
            parts.iter().map(|p| p.mesh.triangle_count()).sum::<usize>()
        );
        RollGeometry {
            spec: roll,
            detail: self.config.detail,
            parts,
        }
    }

    /// Cheapest build: plain cylinder, seam rings, printed end discs.
    fn build_flat_shell(&self, roll: &RollSpec) -> Vec<RollPart> {
        let radius = roll.outer_radius;
        let length = roll.length;
        let mut parts = Vec::with_capacity(5);

        parts.push(RollPart::new(
            PartKind::OuterShell,
            tube(radius, radius, length, self.config.shell_segments, Facing::Outward),
            0.0,
            MaterialKind::PaperSide,
        ));

        // Seam rings sit just proud of the shell near each end.
        let seam_radius = radius * SEAM_RADIAL_RATIO;
        let seam = Arc::new(tube(
            seam_radius,
            seam_radius,
            SEAM_THICKNESS,
            self.config.detail_segments,
            Facing::Outward,
        ));
        let seam_x = length * 0.5 - SEAM_END_INSET;
        parts.push(RollPart::shared(
            PartKind::SeamRing,
            Arc::clone(&seam),
            seam_x,
            MaterialKind::Seam,
        ));
        parts.push(RollPart::shared(
            PartKind::SeamRing,
            seam,
            -seam_x,
            MaterialKind::Seam,
        ));

        // Printed discs float a hair off the paper so they never depth-fight.
        let disc_x = length * 0.5 + EPSILON;
        parts.push(RollPart::new(
            PartKind::EndDisc,
            disc(radius, self.config.shell_segments, Facing::Outward),
            disc_x,
            MaterialKind::EndPrint,
        ));
        parts.push(RollPart::new(
            PartKind::EndDisc,
            disc(radius, self.config.shell_segments, Facing::Inward),
            -disc_x,
            MaterialKind::EndPrint,
        ));

        parts
    }

    /// Middle build: full shell, paper end rings, capped core tube.
    fn build_bump_textured(&self, roll: &RollSpec) -> Vec<RollPart> {
        let radius = roll.outer_radius;
        let core = roll.core_outer_radius;
        let length = roll.length;
        let mut parts = Vec::with_capacity(6);

        parts.push(RollPart::new(
            PartKind::OuterShell,
            tube(radius, radius, length, self.config.shell_segments, Facing::Outward),
            0.0,
            MaterialKind::PaperSide,
        ));

        self.push_end_caps(&mut parts, roll);
        self.push_core_tube(&mut parts, roll);

        // Cap the open core so nothing looks hollow from the ends.
        let core_len = length * CORE_LENGTH_RATIO;
        let cap_x = core_len * 0.5;
        parts.push(RollPart::new(
            PartKind::HoleCap,
            disc(core, self.config.detail_segments, Facing::Outward),
            cap_x,
            MaterialKind::CoreSide,
        ));
        parts.push(RollPart::new(
            PartKind::HoleCap,
            disc(core, self.config.detail_segments, Facing::Inward),
            -cap_x,
            MaterialKind::CoreSide,
        ));

        parts
    }

    /// Full build: beveled shell edges and a bored-out core.
    fn build_beveled(&self, roll: &RollSpec) -> Vec<RollPart> {
        let radius = roll.outer_radius;
        let length = roll.length;
        let mut parts = Vec::with_capacity(7);

        // The shell gives up a bevel's depth at each end.
        let shell_len = (length - BEVEL_DEPTH * 2.0).max(0.0);
        parts.push(RollPart::new(
            PartKind::OuterShell,
            tube(radius, radius, shell_len, self.config.shell_segments, Facing::Outward),
            0.0,
            MaterialKind::PaperSide,
        ));

        let bevel = Arc::new(tube(
            radius,
            radius,
            BEVEL_DEPTH,
            self.config.detail_segments,
            Facing::Outward,
        ));
        let bevel_x = length * 0.5 - BEVEL_DEPTH * 0.5;
        parts.push(RollPart::shared(
            PartKind::BevelRing,
            Arc::clone(&bevel),
            bevel_x,
            MaterialKind::PaperSide,
        ));
        parts.push(RollPart::shared(
            PartKind::BevelRing,
            bevel,
            -bevel_x,
            MaterialKind::PaperSide,
        ));

        self.push_end_caps(&mut parts, roll);
        self.push_core_tube(&mut parts, roll);

        if roll.has_bore() {
            let core_len = length * CORE_LENGTH_RATIO;
            let bore = roll.core_inner_radius();
            parts.push(RollPart::new(
                PartKind::BoreTube,
                tube(bore, bore, core_len, self.config.detail_segments, Facing::Inward),
                0.0,
                MaterialKind::BoreInterior,
            ));
        }

        parts
    }

    /// Annular paper sheets at both ends, facing outward from the roll.
    fn push_end_caps(&self, parts: &mut Vec<RollPart>, roll: &RollSpec) {
        let cap_x = roll.length * 0.5;
        parts.push(RollPart::new(
            PartKind::EndCap,
            annulus(
                roll.core_outer_radius,
                roll.outer_radius,
                self.config.shell_segments,
                Facing::Outward,
            ),
            cap_x,
            MaterialKind::PaperEnd,
        ));
        parts.push(RollPart::new(
            PartKind::EndCap,
            annulus(
                roll.core_outer_radius,
                roll.outer_radius,
                self.config.shell_segments,
                Facing::Inward,
            ),
            -cap_x,
            MaterialKind::PaperEnd,
        ));
    }

    fn push_core_tube(&self, parts: &mut Vec<RollPart>, roll: &RollSpec) {
        let core_len = roll.length * CORE_LENGTH_RATIO;
        parts.push(RollPart::new(
            PartKind::CoreTube,
            tube(
                roll.core_outer_radius,
                roll.core_outer_radius,
                core_len,
                self.config.detail_segments,
                Facing::Outward,
            ),
            0.0,
            MaterialKind::CoreSide,
        ));
    }
}
