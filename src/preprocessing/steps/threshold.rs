use crate::error::OcrError;
use image::{GrayImage, Luma};

/// Binarize with a fixed global cutoff.
///
/// Pixels strictly below the cutoff are treated as ink and become black;
/// everything else becomes white. Downstream consumers rely on the output
/// containing only 0 and 255.
pub fn apply(image: GrayImage, cutoff: u8) -> Result<GrayImage, OcrError> {
    let binarized = GrayImage::from_fn(image.width(), image.height(), |x, y| {
        if image.get_pixel(x, y).0[0] < cutoff {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    });

    Ok(binarized)
}
