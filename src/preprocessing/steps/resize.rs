use crate::error::OcrError;
use image::{imageops, imageops::FilterType, GrayImage};

/// Scale the image to a fixed height, preserving aspect ratio.
///
/// Line crops arrive at whatever height the segmentation produced; the OCR
/// engine behaves best when every line is normalized to the same height.
/// Uses linear filtering, which is plenty for binarized text.
pub fn apply(image: GrayImage, target_height: u32) -> Result<GrayImage, OcrError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(OcrError::PreprocessingError(format!(
            "cannot resize empty {}x{} image",
            width, height
        )));
    }

    if height == target_height {
        return Ok(image);
    }

    let scale = target_height as f32 / height as f32;
    let new_width = ((width as f32 * scale) as u32).max(1);

    Ok(imageops::resize(
        &image,
        new_width,
        target_height,
        FilterType::Triangle,
    ))
}
