//! Pack layout and generation.
//!
//! A pack is a centered lane x channel x layer grid. Lanes run along X
//! (rolls end to end), channels across Z, layers up Y. Layout is pure
//! arithmetic on the spec; generation stamps one shared roll geometry
//! across the grid and swaps it into the caller's root.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use rollpack_core::params::PackSpec;
use rollpack_core::units::EPSILON;

use crate::roll::{BuilderConfig, RollBuilder};
use crate::scene::{PackRoot, RollInstance};

/// Grid spacing and placement for one pack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackLayout {
    /// Rolls per lane along X.
    pub lanes: u32,
    /// Rows across Z.
    pub channels: u32,
    /// Vertical layers along Y.
    pub layers: u32,
    /// Center-to-center spacing along a lane.
    pub axial_spacing: f32,
    /// Center-to-center spacing between channels and between layers.
    pub radial_spacing: f32,
    /// Position of the first roll (lane 0, channel 0, layer 0).
    pub origin: Vec3,
}

impl PackLayout {
    /// Computes the layout for a pack spec.
    ///
    /// Axial spacing is roll length plus gap, radial spacing one diameter;
    /// both carry the anti-coincidence epsilon so neighboring surfaces
    /// never touch exactly. The grid is centered on the origin along every
    /// axis, which keeps the whole pack balanced under the orbit camera.
    #[must_use]
    pub fn compute(spec: &PackSpec) -> Self {
        let axial_spacing = spec.roll.length + spec.gap + EPSILON;
        let radial_spacing = spec.roll.diameter() + EPSILON;
        let origin = Vec3::new(
            centered_offset(spec.lanes, axial_spacing),
            centered_offset(spec.layers, radial_spacing),
            centered_offset(spec.channels, radial_spacing),
        );
        Self {
            lanes: spec.lanes,
            channels: spec.channels,
            layers: spec.layers,
            axial_spacing,
            radial_spacing,
            origin,
        }
    }

    /// Total number of grid cells.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.lanes
            .saturating_mul(self.channels)
            .saturating_mul(self.layers)
    }

    /// Position of one grid cell.
    #[must_use]
    pub fn position(&self, lane: u32, channel: u32, layer: u32) -> Vec3 {
        self.origin
            + Vec3::new(
                lane as f32 * self.axial_spacing,
                layer as f32 * self.radial_spacing,
                channel as f32 * self.radial_spacing,
            )
    }

    /// All cell positions in generation order: layers outermost, then
    /// lanes, then channels.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.layers).flat_map(move |layer| {
            (0..self.lanes).flat_map(move |lane| {
                (0..self.channels).map(move |channel| self.position(lane, channel, layer))
            })
        })
    }
}

/// Offset that centers `count` cells spaced `spacing` apart on zero.
fn centered_offset(count: u32, spacing: f32) -> f32 {
    -(count.saturating_sub(1) as f32 * spacing) / 2.0
}

/// What one generation pass produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackSummary {
    /// Number of rolls placed.
    pub total: u32,
    /// The layout used for placement.
    pub layout: PackLayout,
}

/// Generates packs into a caller-owned [`PackRoot`].
#[derive(Debug, Clone, Default)]
pub struct PackEngine {
    builder: RollBuilder,
}

impl PackEngine {
    /// Creates an engine building rolls with the given configuration.
    #[must_use]
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            builder: RollBuilder::new(config),
        }
    }

    /// The roll builder in use.
    #[must_use]
    pub fn builder(&self) -> &RollBuilder {
        &self.builder
    }

    /// Regenerates the pack described by `spec` into `root`.
    ///
    /// Builds one roll geometry, stamps it across every grid cell sharing
    /// the mesh buffers, and atomically replaces the root's previous
    /// generation. Returns what was placed.
    pub fn generate(&self, spec: &PackSpec, root: &mut PackRoot) -> PackSummary {
        let layout = PackLayout::compute(spec);
        let geometry = self.builder.build(&spec.roll);

        let mut instances = Vec::with_capacity(layout.total() as usize);
        for position in layout.positions() {
            instances.push(RollInstance::new(&geometry, position));
        }
        root.replace(instances);

        let summary = PackSummary {
            total: layout.total(),
            layout,
        };
        log::info!(
            "generated pack: {} rolls ({} lanes x {} channels x {} layers)",
            summary.total,
            layout.lanes,
            layout.channels,
            layout.layers
        );
        summary
    }
}
