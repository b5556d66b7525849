use crate::error::OcrError;
use image::DynamicImage;
use serde::Serialize;

/// Rectangular region of interest in pixel coordinates.
///
/// `right` and `bottom` are exclusive, so a region covers the half-open
/// ranges `left..right` and `top..bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Region {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Region covering an entire `width` x `height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Clamp all edges to the image bounds.
    ///
    /// Coordinates past the edge are pulled in rather than rejected; a region
    /// that ends up empty after clamping is an error.
    pub fn clamped(self, width: u32, height: u32) -> Result<Region, OcrError> {
        let clamped = Region::new(
            self.left.min(width),
            self.top.min(height),
            self.right.min(width),
            self.bottom.min(height),
        );

        if clamped.width() == 0 || clamped.height() == 0 {
            return Err(OcrError::InvalidRegion(format!(
                "{}..{} x {}..{} is empty within a {}x{} image",
                self.left, self.right, self.top, self.bottom, width, height
            )));
        }

        Ok(clamped)
    }

    /// Crop the region out of `image` without consuming it.
    pub fn crop(&self, image: &DynamicImage) -> DynamicImage {
        image.crop_imm(self.left, self.top, self.width(), self.height())
    }
}
