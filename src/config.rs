use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::export::paginate::PageLayout;
use crate::export::pdf::font_available;
use crate::export::ExportSettings;
use crate::sentiment::SentimentBackend;

/// Where Debian and Fedora install the Liberation fonts.
const LIBERATION_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/liberation-sans",
    "/usr/share/fonts/liberation",
];

pub const DEFAULT_FONT_NAME: &str = "LiberationSans";
pub const DEFAULT_MAX_INPUT_BYTES: usize = 100_000;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which sentiment lexicon set to use (default: Vader)
    pub sentiment_backend: SentimentBackend,
    /// Valence lexicon file replacing the embedded one
    pub lexicon_path: Option<PathBuf>,
    /// Largest accepted document, in bytes
    pub max_input_bytes: usize,
    /// Directory holding `<font_name>-Regular.ttf` and friends
    pub font_dir: PathBuf,
    pub font_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default. Malformed values are errors rather than
    /// silently falling back.
    pub fn load() -> Result<Self> {
        let sentiment_backend = match env::var("DOCANALYZER_SENTIMENT").as_deref() {
            Ok("polarity") => SentimentBackend::Polarity,
            Ok("vader") | Ok("") | Err(_) => SentimentBackend::Vader,
            Ok(other) => anyhow::bail!(
                "DOCANALYZER_SENTIMENT must be \"vader\" or \"polarity\", got {other:?}"
            ),
        };

        let max_input_bytes = match env::var("DOCANALYZER_MAX_INPUT_BYTES") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("DOCANALYZER_MAX_INPUT_BYTES is not a size: {raw:?}"))?,
            Err(_) => DEFAULT_MAX_INPUT_BYTES,
        };
        if max_input_bytes == 0 {
            anyhow::bail!("DOCANALYZER_MAX_INPUT_BYTES must be greater than zero");
        }

        let font_dir = env::var("DOCANALYZER_FONT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_font_dir());

        Ok(Self {
            sentiment_backend,
            lexicon_path: env::var("DOCANALYZER_LEXICON")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            max_input_bytes,
            font_dir,
            font_name: env::var("DOCANALYZER_FONT_NAME")
                .unwrap_or_else(|_| DEFAULT_FONT_NAME.to_string()),
        })
    }

    /// Page format for report exports.
    pub fn export_settings(&self) -> ExportSettings {
        ExportSettings {
            font_dir: self.font_dir.clone(),
            font_name: self.font_name.clone(),
            layout: PageLayout::default(),
        }
    }

    /// Check that the PDF font files are present.
    /// Call this before a PDF export.
    pub fn require_fonts(&self) -> Result<()> {
        if !font_available(&self.font_dir, &self.font_name) {
            anyhow::bail!(
                "Font {}-Regular.ttf not found in {}\n\
                 Install the Liberation fonts, or set DOCANALYZER_FONT_DIR and\n\
                 DOCANALYZER_FONT_NAME to a TrueType family on this system.\n\
                 Exporting to a .txt destination needs no fonts.",
                self.font_name,
                self.font_dir.display()
            );
        }
        Ok(())
    }
}

/// First Liberation install found, else the platform font directory.
pub fn default_font_dir() -> PathBuf {
    LIBERATION_DIRS
        .iter()
        .map(Path::new)
        .find(|dir| font_available(dir, DEFAULT_FONT_NAME))
        .map(Path::to_path_buf)
        .or_else(dirs::font_dir)
        .unwrap_or_else(|| PathBuf::from(LIBERATION_DIRS[0]))
}
