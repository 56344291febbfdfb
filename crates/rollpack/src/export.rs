//! Export filename conventions.

use rollpack_core::params::PackSpec;

/// Default export filename for a pack: `pack_<channels>_<lanes>_<layers>.png`.
#[must_use]
pub fn export_filename(spec: &PackSpec) -> String {
    format!("pack_{}_{}_{}.png", spec.channels, spec.lanes, spec.layers)
}

/// Timestamped export filename for when no pack spec is at hand.
#[must_use]
pub fn dated_export_filename() -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    format!("pack_{timestamp}.png")
}
