//! OCR engine implementations
//!
//! Implementations of the OcrEngine trait. Recognition itself is delegated
//! to external programs; an engine wraps the invocation of one of them.

pub mod tesseract;

pub use tesseract::TesseractEngine;
