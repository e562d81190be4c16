//! Image decoding and re-encoding.

use std::path::Path;

use image::{ColorType, DynamicImage, ImageError, ImageReader};

use crate::config::OutputFormat;

use super::ImportError;

/// Decode `source` and write it to `dest` in `format`.
///
/// Overwrites `dest` if it exists. Returns the pixel dimensions.
pub fn convert_image(
    source: &Path,
    dest: &Path,
    format: OutputFormat,
) -> Result<(u32, u32), ImportError> {
    let img = decode(source).map_err(|err| ImportError::Open(source.to_path_buf(), err))?;
    let dimensions = (img.width(), img.height());

    let img = prepare_for(img, format);
    img.save_with_format(dest, format.image_format())
        .map_err(|err| ImportError::Write(dest.to_path_buf(), err))?;

    Ok(dimensions)
}

/// Decode by content. The extension only selected the file.
fn decode(source: &Path) -> Result<DynamicImage, ImageError> {
    ImageReader::open(source)
        .and_then(ImageReader::with_guessed_format)
        .map_err(ImageError::IoError)?
        .decode()
}

/// Convert pixel layouts the target encoder cannot take.
///
/// The WebP encoder only accepts 8-bit channels; 16-bit and float images are
/// narrowed, keeping alpha when present.
fn prepare_for(img: DynamicImage, format: OutputFormat) -> DynamicImage {
    match (format, img.color()) {
        (OutputFormat::Png, _)
        | (_, ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8) => img,
        (OutputFormat::Webp, color) if color.has_alpha() => DynamicImage::ImageRgba8(img.to_rgba8()),
        (OutputFormat::Webp, _) => DynamicImage::ImageRgb8(img.to_rgb8()),
    }
}
