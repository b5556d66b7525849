use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("OCR engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("OCR engine failed: {0}")]
    EngineFailed(String),

    #[error("failed to process image: {0}")]
    ProcessingError(String),

    #[error("preprocessing failed: {0}")]
    PreprocessingError(String),

    #[error("invalid region: {0}")]
    InvalidRegion(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
