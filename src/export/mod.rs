// Report export: paginate a text report and write it to a file.
//
// The destination extension picks the format: `.txt` writes plain text with a
// form feed between pages, anything else renders PDF. Output goes to a
// temporary file in the destination directory that is persisted over the
// destination only once fully written, so a failed export never leaves a
// partial file behind.

pub mod paginate;
pub mod pdf;

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::AnalysisError;
use self::paginate::{paginate, PageLayout, ReportPage};

pub const REPORT_TITLE: &str = "Document Comparison Report";

/// Page separator in plain text exports.
pub const FORM_FEED: char = '\x0c';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Text,
}

impl ExportFormat {
    /// `.txt` (any case) is text, everything else is PDF.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("txt") => ExportFormat::Text,
            _ => ExportFormat::Pdf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Text => "text",
        }
    }
}

/// Fixed page format for exports.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub font_dir: PathBuf,
    pub font_name: String,
    pub layout: PageLayout,
}

/// What an export wrote.
#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub pages: usize,
}

/// Paginate `report_text` and write it to `dest`.
pub fn export_report(
    report_text: &str,
    dest: &Path,
    settings: &ExportSettings,
) -> Result<ExportSummary, AnalysisError> {
    let format = ExportFormat::from_path(dest);
    let pages = paginate(report_text, &settings.layout);

    let bytes = match format {
        ExportFormat::Text => render_text(&pages).into_bytes(),
        ExportFormat::Pdf => {
            let title = format!(
                "{REPORT_TITLE} ({})",
                chrono::Local::now().format("%Y-%m-%d")
            );
            pdf::render_pdf(&pages, &title, &settings.font_dir, &settings.font_name, dest)?
        }
    };

    write_atomically(dest, &bytes)?;
    info!(
        path = %dest.display(),
        format = format.as_str(),
        pages = pages.len(),
        "Exported report"
    );
    Ok(ExportSummary {
        path: dest.to_path_buf(),
        format,
        pages: pages.len(),
    })
}

/// Pages as plain text, each line newline-terminated, pages separated by a
/// form feed.
pub fn render_text(pages: &[ReportPage]) -> String {
    let mut out = String::new();
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            out.push(FORM_FEED);
        }
        for line in &page.lines {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

fn write_atomically(dest: &Path, bytes: &[u8]) -> Result<(), AnalysisError> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if dest.is_dir() {
        return Err(AnalysisError::export(dest, "destination is a directory"));
    }
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| AnalysisError::export(dest, e))?;
    tmp.write_all(bytes)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| AnalysisError::export(dest, e))?;
    tmp.persist(dest)
        .map_err(|e| AnalysisError::export(dest, e.error))?;
    Ok(())
}
