#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
//! Headless export pipeline, end to end.
//!
//! Shows the full handoff: the viewer owns the pack and the naming, a host
//! renderer fills a pixel buffer, and the export path encodes it. Also
//! writes the procedural end-print tile so the texture stage is visible on
//! disk.
//!
//! Run with: `cargo run --example export_demo`

use rollpack::*;
use rollpack_render::grain;

/// Stand-in for a host renderer: fills a frame with a horizontal gradient
/// over the background color.
fn fake_frame(width: u32, height: u32, background: Vec3) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for _y in 0..height {
        for x in 0..width {
            let shade = x as f32 / width.max(1) as f32;
            let color = background * (0.6 + 0.4 * shade) * 255.0;
            pixels.extend_from_slice(&[color.x as u8, color.y as u8, color.z as u8, 255]);
        }
    }
    pixels
}

fn main() -> std::result::Result<(), ExportError> {
    env_logger::init();

    println!("Export Demo");
    println!("===========");
    println!();

    let viewer = Viewer::with_options(ViewOptions::default());
    let spec = viewer.spec();
    println!(
        "Pack on screen: {} rolls, default export name '{}'",
        viewer.total(),
        export_filename(&spec)
    );
    println!("Dated fallback name: '{}'", dated_export_filename());

    // The host renders; this demo substitutes a gradient.
    let background = match viewer.options().background {
        BackgroundMode::Solid(color) => color,
        BackgroundMode::Transparent => Vec3::ONE,
    };
    let (width, height) = (320, 180);
    let pixels = fake_frame(width, height, background);

    let written = viewer.export_frame(&pixels, width, height, None)?;
    println!("Wrote frame to {written}");

    // In-memory encoding, for hosts that upload instead of saving.
    let png = encode_png(&pixels, width, height)?;
    println!("Encoded the same frame to {} bytes of PNG", png.len());

    // The procedural end print for the current roll dimensions.
    let tile = grain::end_print_tile(spec.roll.outer_radius, spec.roll.core_outer_radius);
    save_image("end_print.png", tile.pixels(), tile.width(), tile.height())?;
    println!(
        "Wrote the {}x{} end-print tile to end_print.png",
        tile.width(),
        tile.height()
    );

    Ok(())
}
