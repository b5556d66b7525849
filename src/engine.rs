use crate::error::OcrError;
use image::DynamicImage;

/// Recognition result for a single line image
#[derive(Debug, Clone)]
pub struct OcrResult {
    pub text: String,
    pub confidence: f32,
    pub warnings: Vec<String>,
}

/// Trait that all OCR engines must implement
///
/// Engines receive one preprocessed line image at a time; splitting a page
/// into lines is the library's job, not the engine's.
pub trait OcrEngine: Send + Sync {
    /// Returns the engine identifier (e.g., "tesseract")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of the engine
    fn description(&self) -> &'static str;

    /// Recognize the text in a single line image
    fn recognize_line(&self, image: &DynamicImage) -> Result<OcrResult, OcrError>;

    /// Get supported languages
    fn supported_languages(&self) -> Vec<String>;
}
