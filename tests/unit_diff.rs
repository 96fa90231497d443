// Unit tests for the word-level diff.
//
// Covers the generic alignment over non-string sequences, the tagged word
// report, role reversal, and the unified rendering used in the text report.

use docanalyzer::diff::{align, Alignment, DiffReport, EditTag};

fn texts<'a>(report: &'a DiffReport, tag: EditTag) -> Vec<&'a str> {
    report
        .lines
        .iter()
        .filter(|l| l.tag == tag)
        .map(|l| l.text.as_str())
        .collect()
}

// ============================================================
// Generic alignment
// ============================================================

#[test]
fn align_works_on_integers() {
    let old = [1, 2, 3, 4];
    let new = [1, 3, 4, 5];
    let edits = align(&old, &new);
    let kept: Vec<i32> = edits
        .iter()
        .filter(|e| e.tag == EditTag::Kept)
        .map(|e| *e.value)
        .collect();
    assert_eq!(kept, vec![1, 3, 4]);
    assert_eq!(edits.iter().filter(|e| e.tag == EditTag::Removed).count(), 1);
    assert_eq!(edits.iter().filter(|e| e.tag == EditTag::Added).count(), 1);
}

#[test]
fn alignment_keeps_a_longest_common_subsequence() {
    let old: Vec<char> = "ABCBDAB".chars().collect();
    let new: Vec<char> = "BDCABA".chars().collect();
    let kept = align(&old, &new)
        .iter()
        .filter(|e| e.tag == EditTag::Kept)
        .count();
    // The LCS of these classic inputs has length 4
    assert_eq!(kept, 4);
}

#[test]
fn edit_script_replays_both_sequences() {
    let old = ["a", "b", "c", "d", "e"];
    let new = ["x", "b", "c", "y", "e", "z"];
    let edits = align(&old, &new);
    let replay_old: Vec<&str> = edits
        .iter()
        .filter(|e| e.tag != EditTag::Added)
        .map(|e| *e.value)
        .collect();
    let replay_new: Vec<&str> = edits
        .iter()
        .filter(|e| e.tag != EditTag::Removed)
        .map(|e| *e.value)
        .collect();
    assert_eq!(replay_old, old);
    assert_eq!(replay_new, new);
}

#[test]
fn distant_changes_form_separate_hunks() {
    let old: Vec<String> = (0..30).map(|i| format!("w{i}")).collect();
    let mut new = old.clone();
    new[2] = "changed".to_string();
    new[25] = "also".to_string();
    let hunks = Alignment::new(&old, &new).hunks(3);
    assert_eq!(hunks.len(), 2);
    assert_eq!(hunks[0].header(), "@@ -1,6 +1,6 @@");
    assert_eq!(hunks[1].header(), "@@ -23,7 +23,7 @@");
}

// ============================================================
// DiffReport
// ============================================================

#[test]
fn identical_documents_have_no_added_or_removed() {
    let d = "The cat sat on the mat.";
    let report = DiffReport::between(d, d);
    assert_eq!(report.added().count(), 0);
    assert_eq!(report.removed().count(), 0);
    assert!(report.render().iter().all(|l| l.starts_with(' ')));
}

#[test]
fn empty_documents_have_empty_diff() {
    let report = DiffReport::between("", "");
    assert!(report.is_empty());
    assert!(report.unified_lines().is_empty());
}

#[test]
fn one_empty_document_is_all_added_or_removed() {
    let added = DiffReport::between("", "new words");
    assert_eq!(texts(&added, EditTag::Added), vec!["new", "words"]);
    let removed = DiffReport::between("old words", "");
    assert_eq!(texts(&removed, EditTag::Removed), vec!["old", "words"]);
}

#[test]
fn reversing_roles_swaps_added_and_removed() {
    let d1 = "the quick brown fox jumps";
    let d2 = "the slow brown fox leaps high";
    let forward = DiffReport::between(d1, d2);
    let backward = DiffReport::between(d2, d1);

    assert_eq!(texts(&forward, EditTag::Kept), texts(&backward, EditTag::Kept));
    assert_eq!(texts(&forward, EditTag::Added), texts(&backward, EditTag::Removed));
    assert_eq!(texts(&forward, EditTag::Removed), texts(&backward, EditTag::Added));
    assert_eq!(texts(&forward, EditTag::Kept), vec!["the", "brown", "fox"]);
}

#[test]
fn reversing_roles_with_tied_subsequences_keeps_the_same_words() {
    // Both pairs have more than one longest common subsequence
    for (d1, d2) in [("a b", "b a"), ("the cat the dog", "the dog the cat")] {
        let forward = DiffReport::between(d1, d2);
        let backward = DiffReport::between(d2, d1);
        assert_eq!(texts(&forward, EditTag::Kept), texts(&backward, EditTag::Kept));
        assert_eq!(texts(&forward, EditTag::Added), texts(&backward, EditTag::Removed));
        assert_eq!(texts(&forward, EditTag::Removed), texts(&backward, EditTag::Added));
    }

    let forward = DiffReport::between("a b", "b a");
    assert_eq!(forward.kept().count(), 1);
    assert_eq!(forward.added().count(), 1);
    assert_eq!(forward.removed().count(), 1);
}

#[test]
fn diff_is_deterministic() {
    let a = "one two three four five";
    let b = "one three five seven";
    assert_eq!(DiffReport::between(a, b), DiffReport::between(a, b));
}

#[test]
fn display_words_keep_case_and_punctuation() {
    let report = DiffReport::between("Hello, World!", "hello, World!");
    assert_eq!(texts(&report, EditTag::Removed), vec!["Hello,"]);
    assert_eq!(texts(&report, EditTag::Added), vec!["hello,"]);
    assert_eq!(texts(&report, EditTag::Kept), vec!["World!"]);
}

#[test]
fn unified_rendering_matches_report_layout() {
    let report = DiffReport::between(
        "I love this product, it is great!",
        "I hate this product, it is terrible!",
    );
    assert_eq!(
        report.unified_lines(),
        &[
            "--- document 1",
            "+++ document 2",
            "@@ -1,7 +1,7 @@",
            " I",
            "-love",
            "+hate",
            " this",
            " product,",
            " it",
            " is",
            "-great!",
            "+terrible!",
        ]
    );
}
