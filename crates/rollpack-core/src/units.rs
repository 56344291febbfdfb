//! Scene units and millimeter conversion.
//!
//! All user-facing dimensions are entered in millimeters; everything past
//! sanitization works in scene units where 10 mm equals one unit. Keeping the
//! scene near unit scale keeps depth precision healthy at typical camera
//! distances.

/// Scene units per millimeter (10 mm = 1 scene unit).
pub const MM: f32 = 0.1;

/// Minimum separation between surfaces that would otherwise coincide.
///
/// Inserted between adjacent rolls and between stacked coaxial surfaces so
/// that no two faces occupy the same depth.
pub const EPSILON: f32 = 0.01;

/// Converts a length in millimeters to scene units.
#[must_use]
pub fn mm(value: f32) -> f32 {
    value * MM
}
