// System status display: sentiment backend, lexicons, fonts, limits.

use crate::config::Config;
use crate::export::pdf::font_available;
use crate::sentiment::traits::SentimentScorer;
use crate::sentiment::SentimentAnalyzer;

/// Display system status to the terminal.
pub fn show(config: &Config, analyzer: &SentimentAnalyzer) {
    println!("Sentiment backend: {}", analyzer.name());

    let valence = analyzer.valence_lexicon();
    println!(
        "Valence lexicon: {} ({} entries)",
        valence.source(),
        valence.len()
    );
    match analyzer.opinion_lexicon() {
        Some(opinion) => println!(
            "Opinion lexicon: {} ({} entries)",
            opinion.source(),
            opinion.len()
        ),
        None => {
            println!("Opinion lexicon: disabled");
            println!("  Set DOCANALYZER_SENTIMENT=polarity to add polarity/subjectivity");
        }
    }

    println!(
        "Max input size: {} per document",
        format_bytes(config.max_input_bytes as u64)
    );

    if font_available(&config.font_dir, &config.font_name) {
        println!(
            "PDF font: {} in {}",
            config.font_name,
            config.font_dir.display()
        );
    } else {
        println!(
            "PDF font: {}-Regular.ttf not found in {}",
            config.font_name,
            config.font_dir.display()
        );
        println!("  PDF export unavailable; .txt export still works");
    }
}

pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(1_000_000), "976.6 KB");
        assert_eq!(format_bytes(1_048_576), "1.0 MB");
    }
}
