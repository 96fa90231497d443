// Word tokenizer for the vector space.
//
// Lower-cases and splits on every non-alphanumeric character. Unicode letters
// and digits are word characters, everything else is a boundary.

/// Split text into case-folded word tokens. Empty input yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(
            tokenize("The cat sat on the mat."),
            vec!["the", "cat", "sat", "on", "the", "mat"]
        );
    }

    #[test]
    fn test_tokenize_punctuation_boundaries() {
        assert_eq!(tokenize("don't-stop,now"), vec!["don", "t", "stop", "now"]);
    }

    #[test]
    fn test_tokenize_unicode_words() {
        assert_eq!(tokenize("Café NAÏVE über"), vec!["café", "naïve", "über"]);
    }

    #[test]
    fn test_tokenize_empty_and_symbols() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  !!! ... ---").is_empty());
    }
}
