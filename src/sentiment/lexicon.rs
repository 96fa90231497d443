// Sentiment lexicons: static word weights loaded once at startup.
//
// Two formats, both tab separated with one entry per line:
//
//   valence:  word <TAB> valence [<TAB> ignored columns...]
//   opinion:  word <TAB> polarity <TAB> subjectivity [<TAB> intensity]
//
// The valence format accepts the upstream VADER lexicon file as-is (its extra
// standard-deviation and raw-rating columns are ignored). Default lexicons are
// compiled into the binary; a file path can replace the valence lexicon.
// Any parse error is a ResourceInitFailure.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::error::AnalysisError;

const EMBEDDED_VALENCE: &str = include_str!("../../lexicons/valence.tsv");
const EMBEDDED_OPINION: &str = include_str!("../../lexicons/opinion.tsv");

/// Word -> valence (roughly -4.0 to 4.0).
#[derive(Debug, Clone)]
pub struct ValenceLexicon {
    source: String,
    entries: HashMap<String, f64>,
}

impl ValenceLexicon {
    /// The lexicon compiled into the binary.
    pub fn embedded() -> Result<Self, AnalysisError> {
        Self::parse("embedded valence lexicon", EMBEDDED_VALENCE)
    }

    /// Load a lexicon file from disk.
    pub fn from_file(path: &Path) -> Result<Self, AnalysisError> {
        let name = path.display().to_string();
        let src = std::fs::read_to_string(path).map_err(|e| AnalysisError::resource(&name, e))?;
        Self::parse(&name, &src)
    }

    pub fn parse(source_name: &str, src: &str) -> Result<Self, AnalysisError> {
        let mut entries = HashMap::new();
        for (lineno, fields) in entry_lines(src) {
            let word = fields[0];
            let valence = parse_field(source_name, lineno, fields.get(1), "valence")?;
            entries.insert(word.to_lowercase(), valence);
        }
        if entries.is_empty() {
            return Err(AnalysisError::resource(source_name, "lexicon has no entries"));
        }
        info!(source = source_name, entries = entries.len(), "Loaded valence lexicon");
        Ok(Self {
            source: source_name.to_string(),
            entries,
        })
    }

    /// Valence of a lower-cased word, if listed.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.entries.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Polarity, subjectivity and intensity of a single opinion word.
///
/// Words with an intensity other than 1.0 are modifiers ("very", "slightly"):
/// they scale the next opinion word instead of counting on their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpinionEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    pub intensity: f64,
}

impl OpinionEntry {
    pub fn is_modifier(&self) -> bool {
        (self.intensity - 1.0).abs() > f64::EPSILON
    }
}

#[derive(Debug, Clone)]
pub struct OpinionLexicon {
    source: String,
    entries: HashMap<String, OpinionEntry>,
}

impl OpinionLexicon {
    pub fn embedded() -> Result<Self, AnalysisError> {
        Self::parse("embedded opinion lexicon", EMBEDDED_OPINION)
    }

    pub fn parse(source_name: &str, src: &str) -> Result<Self, AnalysisError> {
        let mut entries = HashMap::new();
        for (lineno, fields) in entry_lines(src) {
            let polarity = parse_field(source_name, lineno, fields.get(1), "polarity")?;
            let subjectivity = parse_field(source_name, lineno, fields.get(2), "subjectivity")?;
            let intensity = match fields.get(3) {
                Some(_) => parse_field(source_name, lineno, fields.get(3), "intensity")?,
                None => 1.0,
            };
            entries.insert(
                fields[0].to_lowercase(),
                OpinionEntry {
                    polarity: polarity.clamp(-1.0, 1.0),
                    subjectivity: subjectivity.clamp(0.0, 1.0),
                    intensity,
                },
            );
        }
        if entries.is_empty() {
            return Err(AnalysisError::resource(source_name, "lexicon has no entries"));
        }
        info!(source = source_name, entries = entries.len(), "Loaded opinion lexicon");
        Ok(Self {
            source: source_name.to_string(),
            entries,
        })
    }

    pub fn get(&self, word: &str) -> Option<&OpinionEntry> {
        self.entries.get(word)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Non-blank lines split on tabs, with 1-based line numbers.
fn entry_lines<'a>(src: &'a str) -> impl Iterator<Item = (usize, Vec<&'a str>)> + 'a {
    src.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r').split('\t').collect()))
}

fn parse_field(
    source_name: &str,
    lineno: usize,
    field: Option<&&str>,
    what: &str,
) -> Result<f64, AnalysisError> {
    let raw = field.ok_or_else(|| {
        AnalysisError::resource(source_name, format!("line {lineno}: missing {what} column"))
    })?;
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AnalysisError::resource(
            source_name,
            format!("line {lineno}: invalid {what} value {raw:?}"),
        )),
    }
}
