//! Extraction pipeline: region crop, line segmentation, per-line recognition.

use crate::config::Config;
use crate::engine::OcrEngine;
use crate::error::OcrError;
use crate::preprocessing::Pipeline;
use crate::region::Region;
use crate::segment::{self, LineSpan};
use image::DynamicImage;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// One recognized text line
#[derive(Debug, Clone, Serialize)]
pub struct LineRecognition {
    /// Row interval of the line within the region of interest
    pub span: LineSpan,
    pub text: String,
    pub confidence: f32,
    pub warnings: Vec<String>,
}

/// Full result of processing one image
#[derive(Debug, Clone, Serialize)]
pub struct PageResult {
    /// Region of interest actually used, after clamping
    pub region: Region,
    /// Recognized lines, top to bottom
    pub lines: Vec<LineRecognition>,
    pub elapsed_ms: u64,
}

/// Runs the whole extraction flow against a configured OCR engine.
pub struct OcrProcessor {
    config: Config,
    pipeline: Pipeline,
    engine: Arc<dyn OcrEngine>,
}

impl OcrProcessor {
    pub fn new(config: Config, engine: Arc<dyn OcrEngine>) -> Self {
        tracing::info!(
            "OCR engine: {} ({})",
            engine.name(),
            engine.description()
        );
        let pipeline = Pipeline::new(&config);
        Self {
            config,
            pipeline,
            engine,
        }
    }

    /// Decode an image file and extract its text lines.
    pub fn process_file(&self, path: &Path) -> Result<PageResult, OcrError> {
        let image = image::open(path)
            .map_err(|e| OcrError::ProcessingError(format!("failed to load image: {}", e)))?;
        self.process_image(&image)
    }

    /// Extract text lines from an already-decoded image.
    pub fn process_image(&self, image: &DynamicImage) -> Result<PageResult, OcrError> {
        let start = Instant::now();

        let region = self
            .config
            .region
            .unwrap_or_else(|| Region::full(image.width(), image.height()))
            .clamped(image.width(), image.height())?;
        let region_image = region.crop(image);

        let mask = self.pipeline.segmentation_mask(&region_image)?;
        tracing::debug!(
            "segmentation stage took {}ms over {} steps",
            mask.total_time_ms,
            mask.steps.len()
        );

        let spans = segment::segment_lines(&mask.image);
        tracing::info!("found {} text lines in {:?}", spans.len(), region);

        let mut lines = Vec::with_capacity(spans.len());
        for span in spans {
            lines.push(self.recognize_span(&region_image, span)?);
        }

        let elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::info!("extracted {} lines in {}ms", lines.len(), elapsed_ms);

        Ok(PageResult {
            region,
            lines,
            elapsed_ms,
        })
    }

    fn recognize_span(
        &self,
        region_image: &DynamicImage,
        span: LineSpan,
    ) -> Result<LineRecognition, OcrError> {
        // The crop is taken from the unprocessed region; the recognition
        // stage does its own binarization on the padded line.
        let (top, bottom) = span.padded(self.config.line_padding, region_image.height());
        let line_crop = region_image.crop_imm(0, top, region_image.width(), bottom - top);

        let prepared = self.pipeline.line_image(&line_crop)?;
        tracing::debug!(
            "recognition stage for rows {}..{} took {}ms",
            span.top,
            span.bottom,
            prepared.total_time_ms
        );

        let result = self
            .engine
            .recognize_line(&DynamicImage::ImageLuma8(prepared.image))?;

        Ok(LineRecognition {
            span,
            text: result.text,
            confidence: result.confidence,
            warnings: result.warnings,
        })
    }
}
