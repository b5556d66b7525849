//! Text-line OCR built on horizontal projection profiles.
//!
//! The library locates text lines in a region of interest by binarizing the
//! region, counting ink pixels per row, and scanning the resulting histogram
//! for runs of positive values bounded by blank rows. Each line is then
//! cropped, normalized to a fixed height, binarized, and handed to an
//! external OCR engine (tesseract) for recognition.

pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod ocr;
pub mod preprocessing;
pub mod region;
pub mod segment;

pub use config::Config;
pub use engine::{OcrEngine, OcrResult};
pub use engines::TesseractEngine;
pub use error::OcrError;
pub use ocr::{LineRecognition, OcrProcessor, PageResult};
pub use region::Region;
pub use segment::{find_line_spans, row_projection, segment_lines, LineSpan};
