// Colored terminal output for comparison results.
//
// This module handles all terminal-specific formatting: colors, the
// sentiment bar chart, the colored diff. The main.rs commands delegate here.

use colored::Colorize;

use crate::diff::EditTag;
use crate::export::ExportSummary;
use crate::report::ComparisonResult;
use crate::scoring::grade::Grade;
use crate::sentiment::traits::SentimentResult;

/// Width of a full-scale bar in the sentiment chart.
const BAR_WIDTH: usize = 30;

/// Longest diff line shown before truncation.
const MAX_DIFF_LINE: usize = 120;

/// Display a full comparison: score, grade, sentiment chart and diff.
pub fn display_comparison(result: &ComparisonResult) {
    println!("\n{}", "=== Document Comparison ===".bold());
    println!();
    println!(
        "  Similarity score: {}",
        format!("{:.2}%", result.similarity.rounded_percent()).bold()
    );
    println!("  Grade for document 2: {}", colorize_grade(result.grade));

    println!("\n{}", "=== Sentiment ===".bold());
    println!();
    display_sentiment_chart(&result.sentiment1, &result.sentiment2);
    for (n, s) in [(1, &result.sentiment1), (2, &result.sentiment2)] {
        if let Some(opinion) = s.opinion {
            println!(
                "  Document {n}: polarity {:.3}, subjectivity {:.3}",
                opinion.polarity, opinion.subjectivity
            );
        }
    }

    println!("\n{}", "=== Differences ===".bold());
    println!();
    let unified = result.diff.unified_lines();
    if unified.is_empty() {
        println!("  {}", "No differences.".green());
    } else {
        for (index, line) in unified.iter().enumerate() {
            let line = super::truncate_chars(line, MAX_DIFF_LINE);
            println!("  {}", colorize_diff_line(index, &line));
        }
        println!();
        println!(
            "  {} words removed, {} words added",
            result.diff.removed().count().to_string().red(),
            result.diff.added().count().to_string().green(),
        );
    }
    println!();
}

/// Grouped bar chart of pos/neg/neu/compound for both documents.
pub fn display_sentiment_chart(doc1: &SentimentResult, doc2: &SentimentResult) {
    for row in sentiment_chart_rows(doc1, doc2) {
        let bar = match row.label {
            "Positive" => row.bar.green(),
            "Negative" => row.bar.red(),
            "Neutral" => row.bar.normal(),
            _ if row.value < 0.0 => row.bar.red(),
            _ => row.bar.green(),
        };
        println!(
            "  {:<9} {} {:>7.3} {}",
            row.label.dimmed(),
            format!("doc{}", row.document).dimmed(),
            row.value,
            bar
        );
    }
}

/// One bar of the sentiment chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub label: &'static str,
    pub document: u8,
    pub value: f64,
    pub bar: String,
}

/// Chart rows grouped by metric, document 1 before document 2. Bar length is
/// proportional to the magnitude; compound bars mark negatives with `-`.
pub fn sentiment_chart_rows(doc1: &SentimentResult, doc2: &SentimentResult) -> Vec<ChartRow> {
    let metrics: [(&'static str, fn(&SentimentResult) -> f64); 4] = [
        ("Positive", |s| s.pos),
        ("Negative", |s| s.neg),
        ("Neutral", |s| s.neu),
        ("Compound", |s| s.compound),
    ];
    let mut rows = Vec::with_capacity(8);
    for (label, metric) in metrics {
        for (document, s) in [(1u8, doc1), (2u8, doc2)] {
            let value = metric(s);
            let fill = if value < 0.0 { '-' } else { '#' };
            rows.push(ChartRow {
                label,
                document,
                value,
                bar: fill.to_string().repeat(bar_len(value)),
            });
        }
    }
    rows
}

fn bar_len(value: f64) -> usize {
    (value.abs().min(1.0) * BAR_WIDTH as f64).round() as usize
}

/// Display where an export was written.
pub fn display_export_summary(summary: &ExportSummary) {
    println!(
        "  {} {} ({}, {} page{})",
        "Exported".green().bold(),
        summary.path.display(),
        summary.format.as_str(),
        summary.pages,
        if summary.pages == 1 { "" } else { "s" }
    );
}

/// Colorize a grade letter.
fn colorize_grade(grade: Grade) -> colored::ColoredString {
    match grade {
        Grade::A => grade.as_str().green().bold(),
        Grade::B => grade.as_str().green(),
        Grade::C => grade.as_str().yellow(),
        Grade::D => grade.as_str().bright_red(),
        Grade::F => grade.as_str().red().bold(),
    }
}

/// Number of file header lines at the top of a unified diff.
const FILE_HEADER_LINES: usize = 2;

/// What a unified diff line is, judged by its position and prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DiffLineKind {
    FileHeader,
    HunkHeader,
    Removed,
    Added,
    Context,
}

/// Only the first two lines are file headers; a removed `--flag` renders as
/// `---flag` and is still a removal.
fn diff_line_kind(index: usize, line: &str) -> DiffLineKind {
    if index < FILE_HEADER_LINES {
        DiffLineKind::FileHeader
    } else if line.starts_with("@@") {
        DiffLineKind::HunkHeader
    } else if line.starts_with(EditTag::Removed.prefix()) {
        DiffLineKind::Removed
    } else if line.starts_with(EditTag::Added.prefix()) {
        DiffLineKind::Added
    } else {
        DiffLineKind::Context
    }
}

fn colorize_diff_line(index: usize, line: &str) -> colored::ColoredString {
    match diff_line_kind(index, line) {
        DiffLineKind::FileHeader => line.bold(),
        DiffLineKind::HunkHeader => line.cyan(),
        DiffLineKind::Removed => line.red(),
        DiffLineKind::Added => line.green(),
        DiffLineKind::Context => line.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_rows_order_and_lengths() {
        let doc1 = SentimentResult {
            pos: 0.5,
            neg: 0.0,
            neu: 0.5,
            compound: 0.8,
            opinion: None,
        };
        let doc2 = SentimentResult {
            compound: -0.4,
            ..SentimentResult::neutral()
        };
        let rows = sentiment_chart_rows(&doc1, &doc2);
        assert_eq!(rows.len(), 8);
        assert_eq!((rows[0].label, rows[0].document), ("Positive", 1));
        assert_eq!((rows[1].label, rows[1].document), ("Positive", 2));
        assert_eq!(rows[0].bar.len(), 15);
        assert!(rows[1].bar.is_empty());
        assert_eq!(rows[7].bar, "-".repeat(12));
    }

    #[test]
    fn test_diff_line_kinds_by_position() {
        let report = crate::diff::DiffReport::between("run --flag now", "run now");
        let kinds: Vec<DiffLineKind> = report
            .unified_lines()
            .iter()
            .enumerate()
            .map(|(i, line)| diff_line_kind(i, line))
            .collect();
        assert_eq!(
            kinds,
            vec![
                DiffLineKind::FileHeader,
                DiffLineKind::FileHeader,
                DiffLineKind::HunkHeader,
                DiffLineKind::Context,
                DiffLineKind::Removed,
                DiffLineKind::Context,
            ]
        );
        assert_eq!(report.unified_lines()[4], "---flag");
    }

    #[test]
    fn test_added_plus_word_is_an_addition() {
        assert_eq!(diff_line_kind(5, "++++"), DiffLineKind::Added);
        assert_eq!(diff_line_kind(0, "--- document 1"), DiffLineKind::FileHeader);
    }

    #[test]
    fn test_bar_len_clamped() {
        assert_eq!(bar_len(1.7), BAR_WIDTH);
        assert_eq!(bar_len(-1.0), BAR_WIDTH);
        assert_eq!(bar_len(0.0), 0);
    }
}
