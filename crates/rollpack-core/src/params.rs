//! Pack and roll parameters, plus sanitization of raw user input.
//!
//! Raw values arrive as untyped numbers (form fields, query strings, JSON)
//! and pass through [`RawPackParams::sanitize`] exactly once. Everything
//! downstream of that boundary works with validated [`PackSpec`] values in
//! scene units and never checks again.

use serde::{Deserialize, Serialize};

use crate::units::{mm, EPSILON};

/// Default lane count (rolls along the pack's length axis).
pub const DEFAULT_LANES: u32 = 4;

/// Default channel count (rows across the pack's depth axis).
pub const DEFAULT_CHANNELS: u32 = 3;

/// Default layer count (stacked vertically).
pub const DEFAULT_LAYERS: u32 = 2;

/// Default roll outer diameter in millimeters.
pub const DEFAULT_ROLL_DIAMETER_MM: f64 = 120.0;

/// Default cardboard core outer diameter in millimeters.
pub const DEFAULT_CORE_DIAMETER_MM: f64 = 45.0;

/// Default roll length in millimeters.
pub const DEFAULT_ROLL_LENGTH_MM: f64 = 100.0;

/// Default end-to-end gap between rolls in a lane, in millimeters.
pub const DEFAULT_GAP_MM: f64 = 7.0;

/// Cardboard core wall thickness in millimeters.
pub const DEFAULT_CORE_WALL_MM: f32 = 1.2;

/// Largest core radius allowed, as a fraction of the outer radius.
pub const CORE_RADIUS_MAX_RATIO: f32 = 0.9;

/// Dimensions of a single roll, in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollSpec {
    /// Outer radius of the wound paper.
    pub outer_radius: f32,
    /// Outer radius of the cardboard core.
    pub core_outer_radius: f32,
    /// Axial length of the roll.
    pub length: f32,
    /// Core wall thickness; the bore radius is derived from it.
    pub wall: f32,
}

impl RollSpec {
    /// Creates a roll spec with the default core wall thickness.
    #[must_use]
    pub fn new(outer_radius: f32, core_outer_radius: f32, length: f32) -> Self {
        Self {
            outer_radius,
            core_outer_radius,
            length,
            wall: mm(DEFAULT_CORE_WALL_MM),
        }
    }

    /// Sets the core wall thickness (scene units).
    #[must_use]
    pub fn with_wall(mut self, wall: f32) -> Self {
        self.wall = wall;
        self
    }

    /// Inner (bore) radius of the core, never negative.
    #[must_use]
    pub fn core_inner_radius(&self) -> f32 {
        (self.core_outer_radius - self.wall).max(0.0)
    }

    /// Whether the core is a visible tube rather than a solid plug.
    #[must_use]
    pub fn has_bore(&self) -> bool {
        self.core_inner_radius() > 0.0
    }

    /// Outer diameter of the roll.
    #[must_use]
    pub fn diameter(&self) -> f32 {
        self.outer_radius * 2.0
    }

    /// Forces the core radius into its valid band.
    ///
    /// A core at or above the outer radius is pulled down to
    /// [`CORE_RADIUS_MAX_RATIO`] of it; a non-positive core is lifted to the
    /// smallest visible radius. Uses `max`/`min` rather than `clamp` so that
    /// non-finite input degrades instead of panicking.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        let max_core = self.outer_radius * CORE_RADIUS_MAX_RATIO;
        let min_core = EPSILON.min(max_core);
        self.core_outer_radius = self.core_outer_radius.max(min_core).min(max_core);
        self
    }
}

/// A full pack description: grid counts, roll dimensions, and spacing gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackSpec {
    /// Rolls per lane along the axial (X) direction.
    pub lanes: u32,
    /// Rows across the depth (Z) direction.
    pub channels: u32,
    /// Vertical (Y) layers.
    pub layers: u32,
    /// Dimensions shared by every roll in the pack.
    pub roll: RollSpec,
    /// End-to-end gap between rolls within a lane, in scene units.
    pub gap: f32,
}

impl PackSpec {
    /// Total number of rolls in the pack.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.lanes
            .saturating_mul(self.channels)
            .saturating_mul(self.layers)
    }
}

impl Default for PackSpec {
    fn default() -> Self {
        RawPackParams::default().sanitize()
    }
}

/// Untrusted pack parameters as they arrive from the user.
///
/// Counts and dimensions are plain floats so that any parse result can be
/// carried here, including `NaN` from empty fields. [`Self::sanitize`]
/// substitutes documented defaults for anything invalid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPackParams {
    pub lanes: f64,
    pub channels: f64,
    pub layers: f64,
    pub roll_diameter_mm: f64,
    pub core_diameter_mm: f64,
    pub roll_length_mm: f64,
    pub gap_mm: f64,
}

impl Default for RawPackParams {
    fn default() -> Self {
        Self {
            lanes: f64::from(DEFAULT_LANES),
            channels: f64::from(DEFAULT_CHANNELS),
            layers: f64::from(DEFAULT_LAYERS),
            roll_diameter_mm: DEFAULT_ROLL_DIAMETER_MM,
            core_diameter_mm: DEFAULT_CORE_DIAMETER_MM,
            roll_length_mm: DEFAULT_ROLL_LENGTH_MM,
            gap_mm: DEFAULT_GAP_MM,
        }
    }
}

impl RawPackParams {
    /// Validates every field and produces a [`PackSpec`] in scene units.
    ///
    /// Never fails: invalid counts fall back to the defaults, invalid
    /// dimensions likewise, and a core that would swallow the roll is
    /// clamped. Fractional counts are truncated, matching integer parsing
    /// of form input.
    #[must_use]
    pub fn sanitize(&self) -> PackSpec {
        let lanes = count_or(self.lanes, DEFAULT_LANES, "lanes");
        let channels = count_or(self.channels, DEFAULT_CHANNELS, "channels");
        let layers = count_or(self.layers, DEFAULT_LAYERS, "layers");

        let outer_diameter = dimension_or(self.roll_diameter_mm, DEFAULT_ROLL_DIAMETER_MM, "roll diameter");
        let core_diameter = dimension_or(self.core_diameter_mm, DEFAULT_CORE_DIAMETER_MM, "core diameter");
        let length = dimension_or(self.roll_length_mm, DEFAULT_ROLL_LENGTH_MM, "roll length");
        let gap = dimension_or(self.gap_mm, DEFAULT_GAP_MM, "gap");

        let roll = RollSpec::new(
            mm(outer_diameter) * 0.5,
            mm(core_diameter) * 0.5,
            mm(length),
        )
        .clamped();

        PackSpec {
            lanes,
            channels,
            layers,
            roll,
            gap: mm(gap),
        }
    }
}

/// Coerces a count to a positive integer, truncating fractions.
fn count_or(value: f64, fallback: u32, label: &str) -> u32 {
    if value.is_finite() && value >= 1.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // checked >= 1.0 above
        let count = value as u32;
        count
    } else {
        log::debug!("invalid {} count ({}), using default {}", label, value, fallback);
        fallback
    }
}

/// Coerces a dimension to a finite non-negative value, in millimeters.
fn dimension_or(value: f64, fallback: f64, label: &str) -> f32 {
    let chosen = if value.is_finite() && value >= 0.0 {
        value
    } else {
        log::debug!("invalid {} ({} mm), using default {} mm", label, value, fallback);
        fallback
    };
    #[allow(clippy::cast_possible_truncation)] // mm magnitudes fit f32 comfortably
    let chosen = chosen as f32;
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_params_sanitize_to_documented_spec() {
        let spec = RawPackParams::default().sanitize();
        assert_eq!(spec.lanes, 4);
        assert_eq!(spec.channels, 3);
        assert_eq!(spec.layers, 2);
        assert!((spec.roll.outer_radius - 6.0).abs() < 1e-6);
        assert!((spec.roll.core_outer_radius - 2.25).abs() < 1e-6);
        assert!((spec.roll.length - 10.0).abs() < 1e-6);
        assert!((spec.gap - 0.7).abs() < 1e-6);
        assert_eq!(spec.total(), 24);
    }

    #[test]
    fn test_invalid_counts_fall_back_to_defaults() {
        let raw = RawPackParams {
            lanes: f64::NAN,
            channels: 0.0,
            layers: -3.0,
            ..RawPackParams::default()
        };
        let spec = raw.sanitize();
        assert_eq!(spec.lanes, DEFAULT_LANES);
        assert_eq!(spec.channels, DEFAULT_CHANNELS);
        assert_eq!(spec.layers, DEFAULT_LAYERS);
    }

    #[test]
    fn test_fractional_counts_truncate() {
        let raw = RawPackParams {
            lanes: 4.7,
            channels: 1.2,
            ..RawPackParams::default()
        };
        let spec = raw.sanitize();
        assert_eq!(spec.lanes, 4);
        assert_eq!(spec.channels, 1);
    }

    #[test]
    fn test_negative_dimension_falls_back() {
        let raw = RawPackParams {
            roll_length_mm: -50.0,
            ..RawPackParams::default()
        };
        let spec = raw.sanitize();
        assert!((spec.roll.length - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_gap_is_accepted() {
        let raw = RawPackParams {
            gap_mm: 0.0,
            ..RawPackParams::default()
        };
        let spec = raw.sanitize();
        assert!(spec.gap.abs() < 1e-6);
    }

    #[test]
    fn test_oversized_core_is_clamped_to_ratio() {
        let raw = RawPackParams {
            core_diameter_mm: 150.0,
            ..RawPackParams::default()
        };
        let spec = raw.sanitize();
        let expected = spec.roll.outer_radius * CORE_RADIUS_MAX_RATIO;
        assert!((spec.roll.core_outer_radius - expected).abs() < 1e-6);
        assert!(spec.roll.core_outer_radius < spec.roll.outer_radius);
    }

    #[test]
    fn test_zero_core_is_lifted_to_minimum() {
        let raw = RawPackParams {
            core_diameter_mm: 0.0,
            ..RawPackParams::default()
        };
        let spec = raw.sanitize();
        assert!(spec.roll.core_outer_radius > 0.0);
    }

    #[test]
    fn test_core_inner_radius_never_negative() {
        let roll = RollSpec::new(6.0, 0.05, 10.0);
        assert!(roll.core_inner_radius().abs() < 1e-6);
        assert!(!roll.has_bore());

        let roll = RollSpec::new(6.0, 2.25, 10.0);
        assert!((roll.core_inner_radius() - 2.13).abs() < 1e-6);
        assert!(roll.has_bore());
    }

    #[test]
    fn test_total_counts_product() {
        let spec = RawPackParams {
            lanes: 5.0,
            channels: 2.0,
            layers: 3.0,
            ..RawPackParams::default()
        }
        .sanitize();
        assert_eq!(spec.total(), 30);
    }

    fn any_input() -> impl Strategy<Value = f64> {
        prop_oneof![
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
            -1.0e6..1.0e6_f64,
        ]
    }

    proptest! {
        #[test]
        fn prop_sanitize_is_total(
            lanes in any_input(),
            channels in any_input(),
            layers in any_input(),
            roll_d in any_input(),
            core_d in any_input(),
            length in any_input(),
            gap in any_input(),
        ) {
            let spec = RawPackParams {
                lanes,
                channels,
                layers,
                roll_diameter_mm: roll_d,
                core_diameter_mm: core_d,
                roll_length_mm: length,
                gap_mm: gap,
            }
            .sanitize();

            prop_assert!(spec.lanes >= 1);
            prop_assert!(spec.channels >= 1);
            prop_assert!(spec.layers >= 1);
            prop_assert!(spec.roll.outer_radius.is_finite());
            prop_assert!(spec.roll.outer_radius >= 0.0);
            prop_assert!(spec.roll.length.is_finite());
            prop_assert!(spec.gap.is_finite() && spec.gap >= 0.0);
            prop_assert!(
                spec.roll.core_outer_radius
                    <= spec.roll.outer_radius * CORE_RADIUS_MAX_RATIO + 1e-6
            );
            prop_assert!(spec.roll.core_inner_radius() <= spec.roll.core_outer_radius);
        }
    }
}
