//! Pack walk-through: generate, inspect, reframe.
//!
//! Builds the default pack, reconfigures the grid the way a host UI would,
//! and drives the camera around the result.
//!
//! Run with: `cargo run --example pack_demo`

use rollpack::*;

fn report(viewer: &Viewer) {
    let summary = viewer.summary();
    let layout = summary.layout;
    println!(
        "  {} rolls ({} lanes x {} channels x {} layers)",
        summary.total, layout.lanes, layout.channels, layout.layers
    );
    println!(
        "  spacing: axial {:.2}, radial {:.2}; first roll at ({:.2}, {:.2}, {:.2})",
        layout.axial_spacing,
        layout.radial_spacing,
        layout.origin.x,
        layout.origin.y,
        layout.origin.z
    );

    let triangles: usize = viewer
        .root()
        .iter()
        .map(|instance| {
            instance
                .parts()
                .iter()
                .map(|part| part.mesh.triangle_count())
                .sum::<usize>()
        })
        .sum();
    println!("  {triangles} triangles across the pack");
}

fn main() {
    env_logger::init();

    println!("Pack Demo");
    println!("=========");
    println!();

    let mut viewer = Viewer::new();
    println!("Default pack:");
    report(&viewer);

    // A flat shelf arrangement: long lanes, single layer.
    let summary = viewer.set_params(&RawPackParams {
        lanes: 6.0,
        channels: 2.0,
        layers: 1.0,
        gap_mm: 2.0,
        ..RawPackParams::default()
    });
    println!();
    println!("Shelf arrangement ({} rolls):", summary.total);
    report(&viewer);

    // Drive the camera the way mouse input would.
    viewer.frame_pack();
    println!();
    println!("Framed:          {}", viewer.pose());
    viewer.camera_mut().orbit(0.6, -0.2);
    viewer.camera_mut().zoom(5.0);
    println!("Orbit + zoom:    {}", viewer.pose());
    viewer.reset_camera();
    println!("Reset:           {}", viewer.pose());
}
