//! Basic integration tests for rollpack-rs.
//!
//! These drive the public facade the way a host application would: create a
//! viewer, push parameters at it, switch presets, and persist options.

use rollpack::*;

#[test]
fn test_fresh_viewer_is_renderable() {
    let viewer = Viewer::new();
    assert_eq!(viewer.total(), 24);
    assert_eq!(viewer.root().len(), 24);

    // Every instance already carries drawable parts.
    for instance in viewer.root() {
        assert!(!instance.parts().is_empty());
        for part in instance.parts() {
            assert!(part.mesh.triangle_count() > 0);
        }
    }
}

#[test]
fn test_garbage_input_still_generates() {
    let mut viewer = Viewer::new();
    let summary = viewer.set_params(&RawPackParams {
        lanes: f64::NAN,
        channels: -2.0,
        layers: f64::INFINITY,
        roll_diameter_mm: -1.0,
        core_diameter_mm: f64::NAN,
        roll_length_mm: -5.0,
        gap_mm: f64::NEG_INFINITY,
    });

    // Everything falls back to the documented defaults.
    assert_eq!(summary.total, 24);
    assert_eq!(viewer.spec().lanes, 4);
    assert_eq!(viewer.spec().channels, 3);
    assert_eq!(viewer.spec().layers, 2);
    assert!((viewer.spec().roll.length - 10.0).abs() < 1e-6);
    assert_eq!(viewer.root().len(), 24);
}

#[test]
fn test_preset_switch_changes_spacing_and_detail() {
    let mut viewer = Viewer::new();
    let warehouse = viewer.apply_preset("warehouse").unwrap();
    let retail = viewer.apply_preset("retail").unwrap();

    // 7 mm vs 1 mm gaps: 0.6 scene units of axial spacing.
    let delta = warehouse.layout.axial_spacing - retail.layout.axial_spacing;
    assert!((delta - 0.6).abs() < 1e-5);

    // Retail builds the cheap flat-shell roll: shell, two seams, two discs.
    let instance = viewer.root().iter().next().unwrap();
    assert_eq!(instance.parts().len(), 5);
    assert_eq!(viewer.options().detail, DetailLevel::FlatShell);
    assert_eq!(viewer.light_rig().name, "soft");
}

#[test]
fn test_regenerate_replaces_previous_pack() {
    let mut viewer = Viewer::new();

    viewer.set_params(&RawPackParams {
        lanes: 1.0,
        channels: 1.0,
        layers: 1.0,
        ..RawPackParams::default()
    });
    assert_eq!(viewer.root().len(), 1);

    let summary = viewer.set_params(&RawPackParams {
        lanes: 3.0,
        channels: 3.0,
        layers: 3.0,
        ..RawPackParams::default()
    });
    assert_eq!(summary.total, 27);
    assert_eq!(viewer.root().len(), 27);
}

#[test]
fn test_options_round_trip_through_file() {
    let dir = std::env::temp_dir().join("rollpack_basics_options_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("options.json");
    let path = path.to_str().unwrap();

    let options = ViewOptions {
        detail: DetailLevel::BumpTextured,
        lighting: LightingPreset::Soft,
        max_pixel_ratio: 1.5,
        ..ViewOptions::default()
    };
    options.save(path).unwrap();

    let loaded = ViewOptions::load(path).unwrap();
    assert_eq!(loaded.detail, DetailLevel::BumpTextured);
    assert_eq!(loaded.lighting, LightingPreset::Soft);
    assert!((loaded.max_pixel_ratio - 1.5).abs() < 1e-6);

    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_viewer_honors_options() {
    let options = ViewOptions {
        detail: DetailLevel::FlatShell,
        ..ViewOptions::default()
    };
    let viewer = Viewer::with_options(options);
    let instance = viewer.root().iter().next().unwrap();
    assert!(instance.parts().iter().any(|p| p.kind == PartKind::SeamRing));
    assert!(instance.parts().iter().all(|p| p.kind != PartKind::BoreTube));
}

#[test]
fn test_one_call_generation_matches_viewer() {
    let raw = RawPackParams {
        lanes: 2.0,
        ..RawPackParams::default()
    };
    let (root, summary) = generate_pack(&raw);

    let mut viewer = Viewer::new();
    viewer.set_params(&raw);

    assert_eq!(summary.total, viewer.total());
    assert_eq!(root.len(), viewer.root().len());
    for (a, b) in root.iter().zip(viewer.root()) {
        assert!((a.position() - b.position()).length() < 1e-6);
    }
}
