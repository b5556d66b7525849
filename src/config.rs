use crate::region::Region;
use std::path::PathBuf;

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Language passed to the OCR engine (e.g. "eng", "deu", "fra")
    pub language: String,
    /// Grayscale cutoff for binarization; pixels strictly below it count as ink
    pub binarize_threshold: u8,
    /// Gaussian kernel size used before the row projection
    pub segment_blur: u32,
    /// Gaussian kernel size used on each cropped line
    pub line_blur: u32,
    /// Height each line is scaled to before recognition, in pixels
    pub line_height: u32,
    /// Extra rows kept above and below each detected line
    pub line_padding: u32,
    /// Region of interest; `None` means the whole image
    pub region: Option<Region>,
    /// Path to the tesseract executable; `None` means `tesseract` on PATH
    pub tesseract_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
            binarize_threshold: 180,
            segment_blur: 9,
            line_blur: 5,
            line_height: 100,
            line_padding: 4,
            region: None,
            tesseract_path: None,
        }
    }
}
