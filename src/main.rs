use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use textline_ocr::{Config, OcrProcessor, Region, TesseractEngine};

#[derive(Parser, Debug)]
#[command(name = "textline-ocr")]
#[command(about = "Extract text lines from an image region via projection segmentation")]
#[command(version)]
pub struct Args {
    /// Image file to read
    pub image: PathBuf,

    /// Left edge of the region of interest (default: 0)
    #[arg(long)]
    pub left: Option<u32>,

    /// Top edge of the region of interest (default: 0)
    #[arg(long)]
    pub top: Option<u32>,

    /// Right edge of the region of interest (default: image width)
    #[arg(long)]
    pub right: Option<u32>,

    /// Bottom edge of the region of interest (default: image height)
    #[arg(long)]
    pub bottom: Option<u32>,

    /// Language for OCR (e.g., "eng", "deu", "fra")
    #[arg(long, env = "OCR_LANGUAGE", default_value = "eng")]
    pub language: String,

    /// Grayscale cutoff for binarization (0-255)
    #[arg(long, env = "OCR_THRESHOLD", default_value = "180")]
    pub threshold: u8,

    /// Gaussian kernel size used before line segmentation
    #[arg(long, default_value = "9")]
    pub segment_blur: u32,

    /// Gaussian kernel size used on each cropped line
    #[arg(long, default_value = "5")]
    pub line_blur: u32,

    /// Height each line is scaled to before recognition, in pixels
    #[arg(long, default_value = "100")]
    pub line_height: u32,

    /// Extra rows kept above and below each detected line
    #[arg(long, default_value = "4")]
    pub line_padding: u32,

    /// Path to the tesseract executable (uses PATH if not set)
    #[arg(long, env = "TESSERACT_PATH")]
    pub tesseract_path: Option<PathBuf>,

    /// Print the full result as JSON instead of one line per text line
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Args {
    fn region(&self) -> Option<Region> {
        if self.left.is_none() && self.top.is_none() && self.right.is_none() && self.bottom.is_none()
        {
            return None;
        }
        // Missing far edges run to the image boundary; clamping trims them.
        Some(Region::new(
            self.left.unwrap_or(0),
            self.top.unwrap_or(0),
            self.right.unwrap_or(u32::MAX),
            self.bottom.unwrap_or(u32::MAX),
        ))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("textline-ocr v{}", env!("CARGO_PKG_VERSION"));

    let config = Config {
        language: args.language.clone(),
        binarize_threshold: args.threshold,
        segment_blur: args.segment_blur,
        line_blur: args.line_blur,
        line_height: args.line_height,
        line_padding: args.line_padding,
        region: args.region(),
        tesseract_path: args.tesseract_path.clone(),
    };

    let engine = TesseractEngine::new(&config)?;
    let processor = OcrProcessor::new(config, Arc::new(engine));

    let result = processor.process_file(&args.image)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for line in &result.lines {
            println!("from {} to {}: {}", line.span.top, line.span.bottom, line.text);
        }
    }

    Ok(())
}
