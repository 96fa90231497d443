// PDF serialization of report pages with genpdf.
//
// Each ReportPage becomes one PDF page: one text element per line, an
// explicit page break between pages. Margins are tight enough that a full
// page of lines never triggers genpdf's own page wrapping.

use std::path::Path;

use genpdf::elements::{Break, PageBreak, Text};
use genpdf::{Document, PaperSize, SimplePageDecorator};
use tracing::debug;

use super::paginate::ReportPage;
use crate::error::AnalysisError;

/// Body text size in points.
pub const FONT_SIZE: u8 = 12;

/// Page margins in millimetres: top, right, bottom, left.
const MARGINS: (i32, i32, i32, i32) = (10, 15, 10, 15);

/// `<font_dir>/<font_name>-Regular.ttf` exists.
pub fn font_available(font_dir: &Path, font_name: &str) -> bool {
    font_dir.join(format!("{font_name}-Regular.ttf")).is_file()
}

/// Render `pages` to PDF bytes. `dest` is only used for error reporting.
pub fn render_pdf(
    pages: &[ReportPage],
    title: &str,
    font_dir: &Path,
    font_name: &str,
    dest: &Path,
) -> Result<Vec<u8>, AnalysisError> {
    let family = genpdf::fonts::from_files(font_dir, font_name, None).map_err(|e| {
        AnalysisError::export(
            dest,
            format!(
                "cannot load font {font_name} from {}: {e}",
                font_dir.display()
            ),
        )
    })?;

    let mut doc = Document::new(family);
    doc.set_title(title);
    doc.set_paper_size(PaperSize::Letter);
    doc.set_font_size(FONT_SIZE);
    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(MARGINS);
    doc.set_page_decorator(decorator);

    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            doc.push(PageBreak::new());
        }
        for line in &page.lines {
            if line.trim().is_empty() {
                doc.push(Break::new(1));
            } else {
                doc.push(Text::new(line.as_str()));
            }
        }
    }

    let mut bytes = Vec::new();
    doc.render(&mut bytes)
        .map_err(|e| AnalysisError::export(dest, format!("PDF rendering failed: {e}")))?;
    debug!(pages = pages.len(), bytes = bytes.len(), "Rendered PDF");
    Ok(bytes)
}
