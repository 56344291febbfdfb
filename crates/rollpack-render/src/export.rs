//! Frame export: writing captured pixels to image files.

use std::path::Path;

use image::{ImageBuffer, Rgba};

/// Saves raw RGBA pixel data to an image file.
///
/// The extension selects the format: `.png` keeps alpha, `.jpg`/`.jpeg`
/// flattens to RGB. Pixels are expected top-left first, 4 bytes each.
///
/// # Errors
/// Returns an error if the data does not match the dimensions, the format
/// is unsupported, or the file cannot be written.
pub fn save_image(filename: &str, data: &[u8], width: u32, height: u32) -> Result<(), ExportError> {
    let path = Path::new(filename);
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(width, height, data.to_vec())
        .ok_or(ExportError::InvalidImageData)?;

    match extension.as_str() {
        "png" => {
            img.save_with_format(path, image::ImageFormat::Png)?;
        }
        "jpg" | "jpeg" => {
            // JPEG carries no alpha
            let rgb_img = image::DynamicImage::ImageRgba8(img).to_rgb8();
            rgb_img.save_with_format(path, image::ImageFormat::Jpeg)?;
        }
        _ => {
            return Err(ExportError::UnsupportedFormat(extension));
        }
    }

    log::info!("wrote {}x{} frame to {}", width, height, filename);
    Ok(())
}

/// Encodes raw RGBA pixel data as an in-memory PNG.
///
/// # Errors
/// Returns an error if the data does not match the dimensions or encoding
/// fails.
pub fn encode_png(data: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(width, height, data.to_vec())
        .ok_or(ExportError::InvalidImageData)?;

    let mut buffer = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buffer, image::ImageFormat::Png)?;

    Ok(buffer.into_inner())
}

/// Error type for frame export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to save image: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid image data")]
    InvalidImageData,
}
