//! Tesseract engine implementation
//!
//! Invokes the external `tesseract` executable on each line image. The
//! binary is probed at construction time so a missing installation fails
//! fast instead of on the first line.

use crate::config::Config;
use crate::engine::{OcrEngine, OcrResult};
use crate::error::OcrError;
use image::{DynamicImage, ImageFormat};
use std::path::PathBuf;
use std::process::Command;

/// Page segmentation mode 7 treats the image as a single text line.
const SINGLE_LINE_PSM: &str = "7";

/// OCR engine wrapping the tesseract command-line program
pub struct TesseractEngine {
    binary: PathBuf,
    language: String,
}

impl TesseractEngine {
    /// Create a new engine, verifying that the tesseract binary is runnable.
    pub fn new(config: &Config) -> Result<Self, OcrError> {
        let binary = config
            .tesseract_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("tesseract"));

        let output = Command::new(&binary)
            .arg("--version")
            .output()
            .map_err(|e| {
                OcrError::EngineUnavailable(format!("{} is not runnable: {}", binary.display(), e))
            })?;

        if !output.status.success() {
            return Err(OcrError::EngineUnavailable(format!(
                "{} --version exited with {}",
                binary.display(),
                output.status
            )));
        }

        // First line names the release; older tesseracts print it to stderr
        let banner = String::from_utf8_lossy(&output.stdout)
            .lines()
            .chain(String::from_utf8_lossy(&output.stderr).lines())
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("tesseract")
            .to_string();
        tracing::info!("using {} at {}", banner, binary.display());

        Ok(Self {
            binary,
            language: config.language.clone(),
        })
    }

    fn list_languages(&self) -> Result<Vec<String>, OcrError> {
        let output = Command::new(&self.binary)
            .arg("--list-langs")
            .output()
            .map_err(|e| OcrError::EngineFailed(format!("--list-langs failed to run: {}", e)))?;

        if !output.status.success() {
            return Err(OcrError::EngineFailed(format!(
                "--list-langs exited with {}",
                output.status
            )));
        }

        Ok(parse_language_listing(&String::from_utf8_lossy(
            &output.stdout,
        )))
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn description(&self) -> &'static str {
        "External tesseract executable invoked per line"
    }

    fn recognize_line(&self, image: &DynamicImage) -> Result<OcrResult, OcrError> {
        // Hand the line over as a temp PNG; tesseract reads files, not pipes
        let temp_file = tempfile::Builder::new().suffix(".png").tempfile()?;

        image
            .save_with_format(temp_file.path(), ImageFormat::Png)
            .map_err(|e| {
                OcrError::ProcessingError(format!("failed to write line image: {}", e))
            })?;

        let output = Command::new(&self.binary)
            .arg(temp_file.path())
            .arg("stdout")
            .args(["-l", self.language.as_str()])
            .args(["--psm", SINGLE_LINE_PSM])
            .output()
            .map_err(|e| {
                OcrError::EngineFailed(format!("failed to run {}: {}", self.binary.display(), e))
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            return Err(OcrError::EngineFailed(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        // Non-fatal chatter (resolution guesses, dictionary notes) lands on
        // stderr even on success; surface it instead of swallowing it.
        let warnings: Vec<String> = stderr
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let confidence = score_line(&text);

        Ok(OcrResult {
            text,
            confidence,
            warnings,
        })
    }

    fn supported_languages(&self) -> Vec<String> {
        match self.list_languages() {
            Ok(langs) if !langs.is_empty() => langs,
            Ok(_) | Err(_) => {
                tracing::warn!("could not list tesseract languages, assuming configured one");
                vec![self.language.clone()]
            }
        }
    }
}

/// Parse `tesseract --list-langs` output: a header line followed by one
/// language code per line.
fn parse_language_listing(listing: &str) -> Vec<String> {
    listing
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Confidence scoring heuristics
// ============================================================================

/// Score recognition quality of a single line from the text alone.
///
/// The plain tesseract CLI reports no confidence, so we estimate one from
/// patterns that distinguish clean reads from garbled ones.
fn score_line(text: &str) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    if text.chars().count() < 4 {
        return 0.5; // Too short to judge
    }

    let char_score = letter_ratio_score(text);
    let word_score = word_length_score(text);
    let repeat_score = repetition_score(text);

    (0.5 * char_score + 0.3 * word_score + 0.2 * repeat_score).clamp(0.0, 1.0)
}

/// Garbled reads are heavy on symbols that are neither letters, digits,
/// whitespace, nor ordinary punctuation.
fn letter_ratio_score(text: &str) -> f32 {
    let total = text.chars().count() as f32;

    let letters = text.chars().filter(|c| c.is_alphanumeric()).count() as f32;
    let noise = text
        .chars()
        .filter(|c| !c.is_alphanumeric() && !c.is_whitespace() && !c.is_ascii_punctuation())
        .count() as f32;

    let noise_penalty = 1.0 - (noise / total * 8.0).min(1.0);
    let letter_score = (letters / total * 1.4).min(1.0);

    0.6 * noise_penalty + 0.4 * letter_score
}

/// A line of real words averages a few characters per word; a spray of
/// single-character tokens usually means the binarization fell apart.
fn word_length_score(text: &str) -> f32 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return 0.5;
    }

    let avg_len = words.iter().map(|w| w.len()).sum::<usize>() as f32 / words.len() as f32;
    let avg_score = match avg_len as usize {
        0..=1 => 0.3,
        2..=3 => 0.7,
        4..=8 => 1.0,
        9..=14 => 0.8,
        _ => 0.4,
    };

    let singles = words.iter().filter(|w| w.len() == 1).count() as f32;
    let single_penalty = 1.0 - (singles / words.len() as f32 * 1.5).min(0.5);

    avg_score * single_penalty
}

/// Runs of the same character ("aaaa", "////") usually mean the engine was
/// fed texture rather than glyphs.
fn repetition_score(text: &str) -> f32 {
    let mut longest = 1u32;
    let mut current = 1u32;
    let mut prev: Option<char> = None;

    for c in text.chars() {
        if Some(c) == prev && !c.is_whitespace() {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
        prev = Some(c);
    }

    match longest {
        1..=3 => 1.0,
        4..=5 => 0.7,
        _ => 0.3,
    }
}
