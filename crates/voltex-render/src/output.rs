//! Saving and encoding rendered frames.
//!
//! Interactive previews stay in memory; thumbnails are encoded here so the
//! host's asset browser can persist them in its cache.

use std::path::Path;

use image::{ImageBuffer, Rgba};
use voltex_volume::Frame;

/// Saves a frame to an image file.
///
/// The format follows the file extension (supports .png, .jpg, .jpeg);
/// JPEG output drops the alpha channel.
///
/// # Errors
/// Returns an error if the frame is empty, the extension is unsupported,
/// or the file cannot be written.
pub fn save_image(filename: &str, frame: &Frame) -> Result<(), OutputError> {
    let path = Path::new(filename);
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let img = frame_to_buffer(frame)?;
    match extension.as_str() {
        "png" => {
            img.save_with_format(path, image::ImageFormat::Png)?;
        }
        "jpg" | "jpeg" => {
            // Convert to RGB for JPEG (no alpha)
            let rgb_img = image::DynamicImage::ImageRgba8(img).to_rgb8();
            rgb_img.save_with_format(path, image::ImageFormat::Jpeg)?;
        }
        _ => {
            return Err(OutputError::UnsupportedFormat(extension));
        }
    }

    Ok(())
}

/// Encodes a frame as PNG bytes in memory.
///
/// # Errors
/// Returns an error if the frame is empty or encoding fails.
pub fn encode_png(frame: &Frame) -> Result<Vec<u8>, OutputError> {
    let img = frame_to_buffer(frame)?;
    let mut buffer = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buffer, image::ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

fn frame_to_buffer(frame: &Frame) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>, OutputError> {
    if frame.is_empty() {
        return Err(OutputError::EmptyFrame);
    }
    ImageBuffer::from_raw(frame.width(), frame.height(), frame.to_rgba8())
        .ok_or(OutputError::InvalidImageData)
}

/// Error type for frame output operations.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to save image: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid image data")]
    InvalidImageData,

    #[error("Cannot encode an empty frame")]
    EmptyFrame,
}
