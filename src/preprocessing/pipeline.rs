use crate::config::Config;
use crate::error::OcrError;
use image::{DynamicImage, GrayImage};
use std::time::Instant;

use super::steps;

/// Timing information for a single preprocessing step
#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: String,
    pub time_ms: u64,
}

/// Output of one stage pipeline, with timing stats
#[derive(Debug, Clone)]
pub struct StageResult {
    pub image: GrayImage,
    pub total_time_ms: u64,
    pub steps: Vec<StepTiming>,
}

/// The two fixed stage pipelines of the extraction flow.
///
/// The segmentation stage binarizes the whole region so text rows can be
/// found by projection; the recognition stage normalizes a single line crop
/// before it is handed to the OCR engine.
pub struct Pipeline {
    segment_blur: u32,
    line_blur: u32,
    binarize_threshold: u8,
    line_height: u32,
}

impl Pipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            segment_blur: config.segment_blur,
            line_blur: config.line_blur,
            binarize_threshold: config.binarize_threshold,
            line_height: config.line_height,
        }
    }

    /// Prepare the region of interest for row projection:
    /// grayscale, blur, threshold.
    pub fn segmentation_mask(&self, region: &DynamicImage) -> Result<StageResult, OcrError> {
        let start = Instant::now();
        let mut timings = Vec::new();

        let gray = run_step("grayscale", region, &mut timings, |img| Ok(img.to_luma8()))?;
        let blurred = run_step("blur", gray, &mut timings, |img| {
            steps::blur::apply(img, self.segment_blur)
        })?;
        let mask = run_step("threshold", blurred, &mut timings, |img| {
            steps::threshold::apply(img, self.binarize_threshold)
        })?;

        Ok(StageResult {
            image: mask,
            total_time_ms: start.elapsed().as_millis() as u64,
            steps: timings,
        })
    }

    /// Prepare a single line crop for recognition:
    /// grayscale, resize to the configured height, blur, threshold.
    pub fn line_image(&self, line: &DynamicImage) -> Result<StageResult, OcrError> {
        let start = Instant::now();
        let mut timings = Vec::new();

        let gray = run_step("grayscale", line, &mut timings, |img| Ok(img.to_luma8()))?;
        let resized = run_step("resize", gray, &mut timings, |img| {
            steps::resize::apply(img, self.line_height)
        })?;
        let blurred = run_step("blur", resized, &mut timings, |img| {
            steps::blur::apply(img, self.line_blur)
        })?;
        let binary = run_step("threshold", blurred, &mut timings, |img| {
            steps::threshold::apply(img, self.binarize_threshold)
        })?;

        Ok(StageResult {
            image: binary,
            total_time_ms: start.elapsed().as_millis() as u64,
            steps: timings,
        })
    }
}

fn run_step<I, O, F>(
    name: &str,
    input: I,
    timings: &mut Vec<StepTiming>,
    step_fn: F,
) -> Result<O, OcrError>
where
    F: FnOnce(I) -> Result<O, OcrError>,
{
    let step_start = Instant::now();
    let result = step_fn(input)?;
    timings.push(StepTiming {
        name: name.to_string(),
        time_ms: step_start.elapsed().as_millis() as u64,
    });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn pipeline() -> Pipeline {
        Pipeline::new(&Config::default())
    }

    #[test]
    fn test_segmentation_mask_is_binary() {
        let mut img = GrayImage::from_pixel(60, 40, Luma([255]));
        for x in 5..55 {
            for y in 15..25 {
                img.put_pixel(x, y, Luma([0]));
            }
        }

        let result = pipeline()
            .segmentation_mask(&DynamicImage::ImageLuma8(img))
            .unwrap();

        assert_eq!(result.image.dimensions(), (60, 40));
        for pixel in result.image.pixels() {
            assert!(pixel.0[0] == 0 || pixel.0[0] == 255);
        }
        assert_eq!(result.steps.len(), 3);
    }

    #[test]
    fn test_segmentation_mask_keeps_text_rows_inked() {
        let mut img = GrayImage::from_pixel(60, 40, Luma([255]));
        for x in 0..60 {
            for y in 18..22 {
                img.put_pixel(x, y, Luma([0]));
            }
        }

        let result = pipeline()
            .segmentation_mask(&DynamicImage::ImageLuma8(img))
            .unwrap();

        assert_eq!(result.image.get_pixel(30, 20).0[0], 0);
        assert_eq!(result.image.get_pixel(30, 2).0[0], 255);
    }

    #[test]
    fn test_line_image_is_normalized_to_configured_height() {
        let img = GrayImage::from_pixel(200, 23, Luma([255]));

        let result = pipeline()
            .line_image(&DynamicImage::ImageLuma8(img))
            .unwrap();

        assert_eq!(result.image.height(), 100);
        assert_eq!(result.steps.len(), 4);
        for pixel in result.image.pixels() {
            assert!(pixel.0[0] == 0 || pixel.0[0] == 255);
        }
    }
}
