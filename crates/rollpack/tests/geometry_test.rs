//! Cross-detail geometry invariants, checked through the public facade.

use std::sync::Arc;

use rollpack::*;

const DETAILS: [DetailLevel; 3] = [
    DetailLevel::FlatShell,
    DetailLevel::BumpTextured,
    DetailLevel::BeveledWithCoreBore,
];

fn build(detail: DetailLevel, roll: &RollSpec) -> RollGeometry {
    RollBuilder::new(BuilderConfig {
        detail,
        ..BuilderConfig::default()
    })
    .build(roll)
}

#[test]
fn test_radius_ordering_every_detail() {
    for detail in DETAILS {
        let geometry = build(detail, &RollSpec::new(6.0, 2.25, 10.0));
        let spec = geometry.spec();
        assert!(spec.core_inner_radius() < spec.core_outer_radius);
        assert!(spec.core_outer_radius < spec.outer_radius);
    }
}

#[test]
fn test_every_detail_fits_the_roll_footprint() {
    for detail in DETAILS {
        let geometry = build(detail, &RollSpec::new(6.0, 2.25, 10.0));
        let (min, max) = geometry.bounds().unwrap();

        // Nothing pokes out more than the seam overhang or the disc float.
        assert!(max.y <= 6.0 * 1.01 + 1e-4, "{detail:?} too wide");
        assert!(max.x <= 5.0 + EPSILON + 1e-4, "{detail:?} too long");
        assert!(min.x >= -(5.0 + EPSILON + 1e-4));
    }
}

#[test]
fn test_instances_share_mesh_buffers() {
    let viewer = Viewer::new();
    let mut instances = viewer.root().iter();
    let first = instances.next().unwrap();
    let second = instances.next().unwrap();

    for (a, b) in first.parts().iter().zip(second.parts()) {
        assert!(Arc::ptr_eq(&a.mesh, &b.mesh));
        assert_eq!(a.offset, b.offset);
    }
    assert!((first.position() - second.position()).length() > 1.0);
}

#[test]
fn test_bore_wall_faces_the_axis() {
    let geometry = build(DetailLevel::BeveledWithCoreBore, &RollSpec::new(6.0, 2.25, 10.0));
    let bore = geometry
        .parts()
        .iter()
        .find(|p| p.kind == PartKind::BoreTube)
        .expect("stock roll has a bore");

    for (position, normal) in bore.mesh.positions.iter().zip(&bore.mesh.normals) {
        // Radial component of the normal points back at the axis.
        let inward = -(position[1] * normal[1] + position[2] * normal[2]);
        assert!(inward > 0.0, "normal {normal:?} at {position:?} faces outward");
    }
}

#[test]
fn test_regeneration_releases_old_buffers() {
    let mut viewer = Viewer::new();
    let watched = Arc::clone(&viewer.root().iter().next().unwrap().parts()[0].mesh);

    // All 24 instances share the shell mesh, plus the watcher.
    assert_eq!(Arc::strong_count(&watched), 25);

    viewer.set_params(&RawPackParams {
        lanes: 1.0,
        channels: 1.0,
        layers: 1.0,
        ..RawPackParams::default()
    });

    // The swap dropped every old instance; only the watcher remains.
    assert_eq!(Arc::strong_count(&watched), 1);
}

#[test]
fn test_pack_bounds_cover_grid_and_rolls() {
    let viewer = Viewer::new();
    let (min, max) = viewer.root().bounding_box().unwrap();

    // Defaults: gap 0.7, so lanes span 3 * 10.71 center to center, plus
    // half a roll at each end; vertical span is one radial step plus a
    // diameter.
    assert!((max.x - (3.0 * 10.71 / 2.0 + 5.0)).abs() < 1e-2);
    assert!((max.y - (12.01 / 2.0 + 6.0)).abs() < 1e-2);
    assert!((max.z - (2.0 * 12.01 / 2.0 + 6.0)).abs() < 1e-2);
    assert!((min + max).length() < 1e-3, "pack bounds off center");
}

#[test]
fn test_material_roles_cover_every_part() {
    let registry = MaterialRegistry::default();
    let viewer = Viewer::new();
    let instance = viewer.root().iter().next().unwrap();

    for part in instance.parts() {
        let material = registry.for_kind(part.material);
        assert!(
            !material.name.is_empty(),
            "part {:?} has no material definition",
            part.kind
        );
    }
}
