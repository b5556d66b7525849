//! Image preprocessing for segmentation and recognition
//!
//! Two fixed stage pipelines share a small set of steps: one prepares the
//! region of interest for row projection, the other prepares an individual
//! line crop for the OCR engine.

pub mod pipeline;
pub mod steps;

pub use pipeline::{Pipeline, StageResult, StepTiming};
