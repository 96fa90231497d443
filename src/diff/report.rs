// Word-level difference report between two documents.
//
// Documents are split on whitespace only, so display words keep their
// original casing and punctuation ("mat." stays "mat."). The report holds the
// full tagged word sequence plus a unified-diff rendering with 3 words of
// context for the text report.

use serde::{Deserialize, Serialize};

use super::align::{Alignment, EditTag};

/// Words of unchanged context around each change in the unified rendering.
pub const UNIFIED_CONTEXT: usize = 3;

const OLD_HEADER: &str = "--- document 1";
const NEW_HEADER: &str = "+++ document 2";

/// One word of the diff, tagged with what happened to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub tag: EditTag,
    pub text: String,
}

impl DiffLine {
    /// `" word"`, `"-word"` or `"+word"`.
    pub fn render(&self) -> String {
        format!("{}{}", self.tag.prefix(), self.text)
    }
}

/// Serialize-only: `unified` is not serialized, so a report is rebuilt with
/// `between` rather than read back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    pub lines: Vec<DiffLine>,
    /// Unified diff lines, empty when nothing changed
    #[serde(skip)]
    unified: Vec<String>,
}

impl DiffReport {
    /// Diff the whitespace-split words of two documents.
    pub fn between(text1: &str, text2: &str) -> Self {
        let old: Vec<&str> = text1.split_whitespace().collect();
        let new: Vec<&str> = text2.split_whitespace().collect();
        let alignment = Alignment::new(&old, &new);

        let lines = alignment
            .edits()
            .into_iter()
            .map(|edit| DiffLine {
                tag: edit.tag,
                text: (*edit.value).to_string(),
            })
            .collect();

        let mut unified = Vec::new();
        let hunks = alignment.hunks(UNIFIED_CONTEXT);
        if !hunks.is_empty() {
            unified.push(OLD_HEADER.to_string());
            unified.push(NEW_HEADER.to_string());
            for hunk in &hunks {
                unified.push(hunk.header());
                unified.extend(
                    hunk.edits
                        .iter()
                        .map(|edit| format!("{}{}", edit.tag.prefix(), edit.value)),
                );
            }
        }

        Self { lines, unified }
    }

    pub fn added(&self) -> impl Iterator<Item = &DiffLine> {
        self.tagged(EditTag::Added)
    }

    pub fn removed(&self) -> impl Iterator<Item = &DiffLine> {
        self.tagged(EditTag::Removed)
    }

    pub fn kept(&self) -> impl Iterator<Item = &DiffLine> {
        self.tagged(EditTag::Kept)
    }

    pub fn has_changes(&self) -> bool {
        self.lines.iter().any(|l| l.tag != EditTag::Kept)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Every word, prefixed with its tag.
    pub fn render(&self) -> Vec<String> {
        self.lines.iter().map(DiffLine::render).collect()
    }

    /// Unified-diff rendering with file and hunk headers.
    pub fn unified_lines(&self) -> &[String] {
        &self.unified
    }

    fn tagged(&self, tag: EditTag) -> impl Iterator<Item = &DiffLine> {
        self.lines.iter().filter(move |l| l.tag == tag)
    }
}
