// Paginator: split a text report into fixed-capacity pages of whole lines.
//
// Geometry is in points. Text starts `top_margin` below the top edge and each
// line moves the cursor down by `line_height`. Before a line is placed, a
// cursor below `bottom_margin` closes the page and the line opens the next
// one. With the US Letter defaults this gives 49 lines per page.

use serde::Serialize;

/// Vertical page geometry, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub page_height: f64,
    pub top_margin: f64,
    pub bottom_margin: f64,
    pub line_height: f64,
}

impl Default for PageLayout {
    /// US Letter, 12pt text at 1.2 line spacing.
    fn default() -> Self {
        Self {
            page_height: 792.0,
            top_margin: 50.0,
            bottom_margin: 50.0,
            line_height: 14.4,
        }
    }
}

impl PageLayout {
    /// How many lines fit on one page. Always at least 1.
    pub fn lines_per_page(&self) -> usize {
        let usable = self.page_height - self.top_margin - self.bottom_margin;
        // `as` saturates: negative and NaN become 0, infinity becomes MAX
        let extra = (usable / self.line_height).floor() as usize;
        extra.saturating_add(1)
    }
}

/// One page of the exported report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPage {
    /// 1-based page number
    pub number: usize,
    pub lines: Vec<String>,
}

/// Split `text` into pages. Lines are never split, dropped or repeated, and
/// the last page is emitted even when partly filled. Empty text gives a
/// single empty page.
pub fn paginate(text: &str, layout: &PageLayout) -> Vec<ReportPage> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        return vec![ReportPage {
            number: 1,
            lines: Vec::new(),
        }];
    }
    lines
        .chunks(layout.lines_per_page())
        .enumerate()
        .map(|(i, chunk)| ReportPage {
            number: i + 1,
            lines: chunk.iter().map(|l| l.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_capacity() {
        assert_eq!(PageLayout::default().lines_per_page(), 49);
    }

    #[test]
    fn test_degenerate_layouts_still_fit_a_line() {
        let cramped = PageLayout {
            page_height: 80.0,
            ..PageLayout::default()
        };
        assert_eq!(cramped.lines_per_page(), 1);

        let flat = PageLayout {
            line_height: f64::NAN,
            ..PageLayout::default()
        };
        assert_eq!(flat.lines_per_page(), 1);
    }

    #[test]
    fn test_overflow_line_starts_next_page() {
        let text: String = (1..=50).map(|i| format!("line {i}\n")).collect();
        let pages = paginate(&text, &PageLayout::default());
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines.len(), 49);
        assert_eq!(pages[1].lines, vec!["line 50"]);
        assert_eq!(pages[1].number, 2);
    }

    #[test]
    fn test_exact_fit_has_no_trailing_page() {
        let text: String = (1..=49).map(|i| format!("{i}\n")).collect();
        assert_eq!(paginate(&text, &PageLayout::default()).len(), 1);
    }

    #[test]
    fn test_empty_text_single_empty_page() {
        let pages = paginate("", &PageLayout::default());
        assert_eq!(pages.len(), 1);
        assert!(pages[0].lines.is_empty());
    }
}
