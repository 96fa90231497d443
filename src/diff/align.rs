// Generic LCS alignment over two sequences.
//
// Works for any element type with equality, hashing and a total order, so the
// same routine aligns words, lines or tokens. The alignment comes from the
// `similar` crate's Myers diff, which yields a minimal edit script
// (equivalently a longest common subsequence) in linear space. This module
// turns its ops into a flat, tagged edit script and groups edits into context
// hunks.
//
// Myers breaks ties between equally long subsequences by argument order, so
// the pair is always diffed with the lexicographically smaller sequence first.
// Swapping the inputs then swaps added and removed and keeps the same elements.

use std::hash::Hash;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use similar::{capture_diff_slices, group_diff_ops, Algorithm, DiffOp, DiffTag};

/// What happened to one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditTag {
    /// Present in both sequences
    Kept,
    /// Only in the old (first) sequence
    Removed,
    /// Only in the new (second) sequence
    Added,
}

impl EditTag {
    /// Unified-diff line prefix.
    pub fn prefix(&self) -> char {
        match self {
            EditTag::Kept => ' ',
            EditTag::Removed => '-',
            EditTag::Added => '+',
        }
    }

    /// The tag seen from the other side of a swapped comparison.
    pub fn reversed(&self) -> Self {
        match self {
            EditTag::Kept => EditTag::Kept,
            EditTag::Removed => EditTag::Added,
            EditTag::Added => EditTag::Removed,
        }
    }
}

/// One element of the edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit<'a, T> {
    pub tag: EditTag,
    pub value: &'a T,
}

/// A run of edits with surrounding context, as in a unified diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<'a, T> {
    pub old_range: Range<usize>,
    pub new_range: Range<usize>,
    pub edits: Vec<Edit<'a, T>>,
}

impl<T> Hunk<'_, T> {
    /// `@@ -a,b +c,d @@` header with 1-based starts.
    pub fn header(&self) -> String {
        format!(
            "@@ -{} +{} @@",
            format_range(&self.old_range),
            format_range(&self.new_range)
        )
    }
}

/// Unified-diff range: a lone line prints as its number, an empty range
/// points at the line before it.
fn format_range(range: &Range<usize>) -> String {
    let len = range.end - range.start;
    match len {
        0 => format!("{},0", range.start),
        1 => format!("{}", range.start + 1),
        _ => format!("{},{}", range.start + 1, len),
    }
}

/// The alignment of two sequences.
pub struct Alignment<'a, T> {
    old: &'a [T],
    new: &'a [T],
    ops: Vec<DiffOp>,
    /// Ops were computed as `(new, old)`
    swapped: bool,
}

impl<'a, T: Hash + Eq + Ord> Alignment<'a, T> {
    pub fn new(old: &'a [T], new: &'a [T]) -> Self {
        let swapped = old > new;
        let ops = if swapped {
            capture_diff_slices(Algorithm::Myers, new, old)
        } else {
            capture_diff_slices(Algorithm::Myers, old, new)
        };
        Self {
            old,
            new,
            ops,
            swapped,
        }
    }

    /// Every element of both sequences in order, tagged.
    pub fn edits(&self) -> Vec<Edit<'a, T>> {
        self.edits_for(&self.ops)
    }

    /// Changed regions with up to `context` kept elements around each.
    /// Identical sequences produce no hunks.
    pub fn hunks(&self, context: usize) -> Vec<Hunk<'a, T>> {
        group_diff_ops(self.ops.clone(), context)
            .into_iter()
            .filter_map(|group| {
                let (_, first_old, first_new) = self.op_ranges(group.first()?);
                let (_, last_old, last_new) = self.op_ranges(group.last()?);
                Some(Hunk {
                    old_range: first_old.start..last_old.end,
                    new_range: first_new.start..last_new.end,
                    edits: self.edits_for(&group),
                })
            })
            .collect()
    }

    pub fn has_changes(&self) -> bool {
        self.ops.iter().any(|op| op.tag() != DiffTag::Equal)
    }

    /// Flatten ops into edits. Within each changed run, removals come before
    /// additions regardless of how the diff interleaved them.
    fn edits_for(&self, ops: &[DiffOp]) -> Vec<Edit<'a, T>> {
        let (old, new) = (self.old, self.new);
        let mut edits = Vec::new();
        let mut added = Vec::new();
        for op in ops {
            let (tag, old_range, new_range) = self.op_ranges(op);
            let (old_items, new_items) = (&old[old_range], &new[new_range]);
            if tag == DiffTag::Equal {
                edits.append(&mut added);
                edits.extend(old_items.iter().map(|value| Edit {
                    tag: EditTag::Kept,
                    value,
                }));
            } else {
                edits.extend(old_items.iter().map(|value| Edit {
                    tag: EditTag::Removed,
                    value,
                }));
                added.extend(new_items.iter().map(|value| Edit {
                    tag: EditTag::Added,
                    value,
                }));
            }
        }
        edits.append(&mut added);
        edits
    }

    /// Tag and ranges of an op in terms of `(old, new)`.
    fn op_ranges(&self, op: &DiffOp) -> (DiffTag, Range<usize>, Range<usize>) {
        let (tag, first, second) = op.as_tag_tuple();
        if !self.swapped {
            return (tag, first, second);
        }
        let tag = match tag {
            DiffTag::Delete => DiffTag::Insert,
            DiffTag::Insert => DiffTag::Delete,
            other => other,
        };
        (tag, second, first)
    }
}

/// Align two sequences and return the tagged edit script.
pub fn align<'a, T: Hash + Eq + Ord>(old: &'a [T], new: &'a [T]) -> Vec<Edit<'a, T>> {
    Alignment::new(old, new).edits()
}
