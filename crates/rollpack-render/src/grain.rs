//! Procedural grain tiles for paper surfaces.
//!
//! Small CPU-generated RGBA tiles stand in for scanned paper textures: a
//! noisy albedo tile for the wound side, a noisy relief tile for bump
//! mapping, and a deterministic printed disc for the roll ends. The noise
//! tiles are cosmetic and unseeded; nothing downstream may depend on their
//! exact pixel values.

use rand::Rng;

/// Edge length of the repeating paper tiles.
pub const GRAIN_TILE_SIZE: u32 = 64;

/// Edge length of the printed end disc.
pub const END_PRINT_SIZE: u32 = 256;

/// An RGBA8 pixel tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrainTile {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl GrainTile {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    /// Tile width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Tile height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value at a pixel.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = ((y * self.width + x) * 4) as usize;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }

    /// Copies the tile into an [`image::RgbaImage`].
    #[must_use]
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .expect("tile buffer matches its dimensions")
    }
}

/// Albedo tile for the wound paper side: near-white with 8 levels of noise.
#[must_use]
pub fn paper_side_tile() -> GrainTile {
    let mut rng = rand::thread_rng();
    let mut tile = GrainTile::new(GRAIN_TILE_SIZE, GRAIN_TILE_SIZE);
    for y in 0..GRAIN_TILE_SIZE {
        for x in 0..GRAIN_TILE_SIZE {
            let shade = luma(244.0 + rng.gen_range(0.0..8.0));
            tile.set_pixel(x, y, [shade, shade, shade, 255]);
        }
    }
    tile
}

/// Relief tile for bump mapping: mid-gray noise over a vertical gradient.
///
/// The gradient makes the winding read slightly tighter toward one end.
#[must_use]
pub fn paper_bump_tile() -> GrainTile {
    let mut rng = rand::thread_rng();
    let mut tile = GrainTile::new(GRAIN_TILE_SIZE, GRAIN_TILE_SIZE);
    let size = GRAIN_TILE_SIZE as f32;
    for y in 0..GRAIN_TILE_SIZE {
        let gradient = (y as f32 / size) * 20.0;
        for x in 0..GRAIN_TILE_SIZE {
            let shade = luma(120.0 + rng.gen_range(0.0..18.0) + gradient);
            tile.set_pixel(x, y, [shade, shade, shade, 255]);
        }
    }
    tile
}

/// Printed artwork for a roll end, fully deterministic.
///
/// Draws concentric regions scaled by the core-to-outer radius ratio: paper
/// face with a soft edge-darkening falloff, a faint compression ring where
/// the winding tightens, the beige core board, and the gray hole. Pixels
/// outside the disc are transparent.
#[must_use]
pub fn end_print_tile(outer_radius: f32, core_radius: f32) -> GrainTile {
    let size = END_PRINT_SIZE;
    let mut tile = GrainTile::new(size, size);

    let center = size as f32 / 2.0;
    let outer_pix = size as f32 * 0.45;
    let ratio = if outer_radius > 0.0 {
        (core_radius / outer_radius).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let core_pix = outer_pix * ratio;
    let hole_pix = core_pix * 0.55;
    let ring_pix = (outer_pix + core_pix) * 0.52;

    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let r = ((px - center).powi(2) + (py - center).powi(2)).sqrt();

            if r > outer_pix {
                continue; // transparent surround
            }

            // Paper face with a soft darkening toward the rim.
            let mut color = [245.0, 245.0, 245.0];
            let ao_start = outer_pix * 0.3;
            let ao = ((r - ao_start) / (outer_pix - ao_start)).clamp(0.0, 1.0) * 0.035;
            darken(&mut color, ao);

            // Faint compression ring between core and rim.
            if (r - ring_pix).abs() <= 0.5 {
                blend(&mut color, [200.0, 200.0, 200.0], 0.28);
            }

            if r <= core_pix {
                color = [232.0, 219.0, 201.0];
                // Slightly darker toward the hole.
                let t = if core_pix > hole_pix {
                    ((r - hole_pix) / (core_pix - hole_pix)).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                darken(&mut color, 0.035 * (1.0 - t));
            }

            if r <= hole_pix {
                color = [214.0, 214.0, 214.0];
            }

            tile.set_pixel(x, y, [luma(color[0]), luma(color[1]), luma(color[2]), 255]);
        }
    }
    tile
}

fn darken(color: &mut [f32; 3], amount: f32) {
    for channel in color.iter_mut() {
        *channel *= 1.0 - amount;
    }
}

fn blend(color: &mut [f32; 3], over: [f32; 3], alpha: f32) {
    for (channel, top) in color.iter_mut().zip(over) {
        *channel = *channel * (1.0 - alpha) + top * alpha;
    }
}

fn luma(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_side_tile_range() {
        let tile = paper_side_tile();
        assert_eq!(tile.width(), GRAIN_TILE_SIZE);
        assert_eq!(tile.height(), GRAIN_TILE_SIZE);
        for chunk in tile.pixels().chunks(4) {
            assert!(chunk[0] >= 244, "shade {} below range", chunk[0]);
            assert!(chunk[0] <= 252, "shade {} above range", chunk[0]);
            assert_eq!(chunk[0], chunk[1]);
            assert_eq!(chunk[1], chunk[2]);
            assert_eq!(chunk[3], 255);
        }
    }

    #[test]
    fn test_bump_tile_has_vertical_gradient() {
        let tile = paper_bump_tile();
        let row_mean = |y: u32| -> f32 {
            (0..GRAIN_TILE_SIZE)
                .map(|x| f32::from(tile.pixel(x, y)[0]))
                .sum::<f32>()
                / GRAIN_TILE_SIZE as f32
        };
        // The gradient adds ~20 levels top to bottom; noise averages out.
        assert!(row_mean(GRAIN_TILE_SIZE - 1) > row_mean(0) + 10.0);
    }

    #[test]
    fn test_end_print_is_deterministic() {
        let a = end_print_tile(6.0, 2.25);
        let b = end_print_tile(6.0, 2.25);
        assert_eq!(a, b);
    }

    #[test]
    fn test_end_print_regions() {
        let tile = end_print_tile(6.0, 2.25);

        // Center lands in the gray hole.
        let center = tile.pixel(END_PRINT_SIZE / 2, END_PRINT_SIZE / 2);
        assert_eq!(center, [214, 214, 214, 255]);

        // Corners are transparent.
        assert_eq!(tile.pixel(0, 0)[3], 0);
        assert_eq!(tile.pixel(END_PRINT_SIZE - 1, END_PRINT_SIZE - 1)[3], 0);

        // Halfway between core and rim is near-white paper.
        let outer_pix = END_PRINT_SIZE as f32 * 0.45;
        let x = (END_PRINT_SIZE as f32 / 2.0 + outer_pix * 0.8) as u32;
        let paper = tile.pixel(x, END_PRINT_SIZE / 2);
        assert!(paper[0] > 230);
        assert_eq!(paper[3], 255);
    }

    #[test]
    fn test_end_print_core_scales_with_ratio() {
        // With a huge core the beige board reaches most of the disc.
        let tile = end_print_tile(6.0, 5.4);
        let outer_pix = END_PRINT_SIZE as f32 * 0.45;
        let x = (END_PRINT_SIZE as f32 / 2.0 + outer_pix * 0.7) as u32;
        let pixel = tile.pixel(x, END_PRINT_SIZE / 2);
        // Beige: red well above blue.
        assert!(pixel[0] > pixel[2] + 20);
    }

    #[test]
    fn test_end_print_degenerate_outer() {
        let tile = end_print_tile(0.0, 1.0);
        // Ratio collapses to zero; the disc is all paper, no core.
        let center = tile.pixel(END_PRINT_SIZE / 2, END_PRINT_SIZE / 2);
        assert!(center[0] > 230);
    }

    #[test]
    fn test_to_rgba_image() {
        let image = end_print_tile(6.0, 2.25).to_rgba_image();
        assert_eq!(image.dimensions(), (END_PRINT_SIZE, END_PRINT_SIZE));
    }
}
