// Unit tests for pagination and report export.
//
// PDF tests render with the DejaVu Sans fixture in `tests/fonts`, copied into
// a temporary directory under the four style names genpdf loads.

use std::path::{Path, PathBuf};

use docanalyzer::config::{default_font_dir, DEFAULT_FONT_NAME};
use docanalyzer::error::AnalysisError;
use docanalyzer::export::paginate::{paginate, PageLayout};
use docanalyzer::export::{export_report, ExportFormat, ExportSettings, FORM_FEED};

fn numbered_report(lines: usize) -> String {
    (1..=lines).map(|i| format!("line {i}\n")).collect()
}

fn settings() -> ExportSettings {
    ExportSettings {
        font_dir: default_font_dir(),
        font_name: DEFAULT_FONT_NAME.to_string(),
        layout: PageLayout::default(),
    }
}

// ============================================================
// Paginator
// ============================================================

#[test]
fn pages_concatenate_back_to_the_report() {
    let layout = PageLayout::default();
    for n in [0, 1, 48, 49, 50, 97, 98, 99, 250] {
        let report = numbered_report(n);
        let pages = paginate(&report, &layout);
        let rejoined: Vec<&str> = pages
            .iter()
            .flat_map(|p| p.lines.iter().map(String::as_str))
            .collect();
        let original: Vec<&str> = report.lines().collect();
        assert_eq!(rejoined, original, "{n} lines");
    }
}

#[test]
fn only_the_last_page_is_partial() {
    let layout = PageLayout::default();
    let cap = layout.lines_per_page();
    let pages = paginate(&numbered_report(cap * 3 + 5), &layout);
    assert_eq!(pages.len(), 4);
    assert!(pages[..3].iter().all(|p| p.lines.len() == cap));
    assert_eq!(pages[3].lines.len(), 5);
    let numbers: Vec<usize> = pages.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
}

#[test]
fn blank_lines_are_kept_in_place() {
    let pages = paginate("a\n\nb\n", &PageLayout::default());
    assert_eq!(pages[0].lines, vec!["a", "", "b"]);
}

#[test]
fn custom_layout_changes_capacity() {
    let layout = PageLayout {
        page_height: 200.0,
        top_margin: 20.0,
        bottom_margin: 20.0,
        line_height: 40.0,
    };
    // Lines at 180, 140, 100, 60, 20; the next would start below the margin
    assert_eq!(layout.lines_per_page(), 5);
    assert_eq!(paginate(&numbered_report(11), &layout).len(), 3);
}

// ============================================================
// Text export
// ============================================================

#[test]
fn text_export_writes_pages_with_form_feeds() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("report.txt");
    let report = numbered_report(60);

    let summary = export_report(&report, &dest, &settings()).unwrap();
    assert_eq!(summary.format, ExportFormat::Text);
    assert_eq!(summary.pages, 2);

    let written = std::fs::read_to_string(&dest).unwrap();
    let pages: Vec<&str> = written.split(FORM_FEED).collect();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].lines().count(), 49);
    assert_eq!(pages[1].lines().next(), Some("line 50"));
    assert_eq!(written.replace(FORM_FEED, ""), report);
}

#[test]
fn text_export_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("report.txt");
    std::fs::write(&dest, "stale contents that are much longer than the new ones").unwrap();

    export_report("fresh\n", &dest, &settings()).unwrap();
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "fresh\n");
}

#[test]
fn export_to_missing_directory_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("no-such-dir").join("report.txt");
    let err = export_report("text\n", &dest, &settings()).unwrap_err();
    assert!(matches!(err, AnalysisError::ExportFailure { .. }));
    assert!(!dest.exists());
}

#[test]
fn export_onto_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("taken.txt");
    std::fs::create_dir(&dest).unwrap();
    let err = export_report("text\n", &dest, &settings()).unwrap_err();
    assert!(matches!(err, AnalysisError::ExportFailure { .. }));
}

#[test]
fn failed_export_leaves_no_temp_files() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("report.pdf");
    let bad_fonts = ExportSettings {
        font_dir: PathBuf::from("/nonexistent/fonts"),
        ..settings()
    };
    let err = export_report("text\n", &dest, &bad_fonts).unwrap_err();
    assert!(matches!(err, AnalysisError::ExportFailure { .. }));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

// ============================================================
// PDF export (needs fonts)
// ============================================================

const FIXTURE_FONT: &str = "DejaVuSans";

/// A font directory holding the fixture under every style name.
fn fixture_fonts() -> tempfile::TempDir {
    let source = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fonts")
        .join(format!("{FIXTURE_FONT}.ttf"));
    let dir = tempfile::tempdir().unwrap();
    for style in ["Regular", "Bold", "Italic", "BoldItalic"] {
        let target = dir.path().join(format!("{FIXTURE_FONT}-{style}.ttf"));
        std::fs::copy(&source, target).unwrap();
    }
    dir
}

/// Count `/Type /Page` dictionaries, leaving out the `/Pages` tree nodes.
fn pdf_page_objects(bytes: &[u8]) -> usize {
    let key = b"/Type";
    let mut count = 0;
    for start in 0..bytes.len() {
        if !bytes[start..].starts_with(key) {
            continue;
        }
        let rest = &bytes[start + key.len()..];
        let skipped = rest.iter().take_while(|b| b.is_ascii_whitespace()).count();
        let value = &rest[skipped..];
        if value.starts_with(b"/Page")
            && !value.get(5).is_some_and(|b| b.is_ascii_alphanumeric())
        {
            count += 1;
        }
    }
    count
}

#[test]
fn pdf_export_writes_one_pdf_page_per_report_page() {
    let fonts = fixture_fonts();
    let settings = ExportSettings {
        font_dir: fonts.path().to_path_buf(),
        font_name: FIXTURE_FONT.to_string(),
        layout: PageLayout::default(),
    };
    let dir = tempfile::tempdir().unwrap();

    for (lines, pages) in [(49, 1), (98, 2), (120, 3)] {
        let dest = dir.path().join(format!("report-{lines}.pdf"));
        let summary = export_report(&numbered_report(lines), &dest, &settings).unwrap();
        assert_eq!(summary.format, ExportFormat::Pdf);
        assert_eq!(summary.pages, pages);

        let bytes = std::fs::read(&dest).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(pdf_page_objects(&bytes), pages, "{lines}-line report");
    }
}

#[test]
fn page_object_count_ignores_the_page_tree() {
    let sample = b"<</Type/Pages/Count 2>> <</Type /Page>> <</Type/Page/Parent 1 0 R>>";
    assert_eq!(pdf_page_objects(sample), 2);
}
