//! Presets tour: the built-in looks and their JSON form.
//!
//! Applies each built-in preset to a viewer and reports what changes: the
//! light rig, the geometry detail, and the resulting pack. Finishes with a
//! JSON round-trip of a custom preset.
//!
//! Run with: `cargo run --example presets_demo`

use rollpack::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("Presets Demo");
    println!("============");

    let mut viewer = Viewer::new();
    for preset in Preset::builtin() {
        let summary = viewer.apply_preset(&preset.name)?;
        let rig = viewer.light_rig();

        println!();
        println!("Preset '{}':", preset.name);
        println!("  detail:   {:?}", viewer.options().detail);
        println!("  lighting: {} ({} lights)", rig.name, rig.len());
        println!("  gap:      {:.1} mm", preset.params.gap_mm);
        println!(
            "  pack:     {} rolls, axial spacing {:.2}",
            summary.total, summary.layout.axial_spacing
        );
    }

    // Custom presets round-trip through JSON for sharing.
    let custom = Preset {
        name: "sample".to_string(),
        params: RawPackParams {
            lanes: 2.0,
            channels: 2.0,
            layers: 4.0,
            ..RawPackParams::default()
        },
        lighting: LightingPreset::Studio,
        detail: DetailLevel::BumpTextured,
    };
    let json = custom.to_json()?;
    let restored = Preset::from_json(&json)?;

    println!();
    println!("Custom preset '{}' round-trips through JSON:", restored.name);
    println!("{json}");

    Ok(())
}
