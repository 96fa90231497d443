use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use docanalyzer::config::Config;
use docanalyzer::export::{export_report, ExportFormat};
use docanalyzer::output::terminal;
use docanalyzer::pipeline::{validate_documents, DocumentAnalyzer};
use docanalyzer::sentiment::SentimentAnalyzer;

/// docanalyzer: compare two text documents.
///
/// Reports TF-IDF cosine similarity, a letter grade, per-document sentiment
/// and a word-level diff, and exports the report to PDF or text.
#[derive(Parser)]
#[command(name = "docanalyzer", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two documents
    Compare {
        /// First document (the reference)
        doc1: PathBuf,

        /// Second document (the one being graded)
        doc2: PathBuf,

        /// Print the result as JSON instead of the colored report
        #[arg(long)]
        json: bool,

        /// Also export the text report (.pdf or .txt)
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Export a saved text report to PDF or paginated text
    Export {
        /// Text report to paginate
        report: PathBuf,

        /// Destination file (.pdf or .txt)
        destination: PathBuf,
    },

    /// Show configuration status (sentiment backend, lexicons, fonts)
    Status,

    /// Serve the compare API over HTTP
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: 5000)
        #[arg(long, default_value = "5000")]
        port: u16,

        /// Address to bind (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docanalyzer=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Compare {
            doc1,
            doc2,
            json,
            export,
        } => {
            let analyzer = load_analyzer(&config)?;
            let text1 = read_document(&doc1)?;
            let text2 = read_document(&doc2)?;
            let (text1, text2) = validate_documents(
                Some(text1.as_str()),
                Some(text2.as_str()),
                config.max_input_bytes,
            )?;

            let result = analyzer.compare(text1, text2);
            info!(
                similarity = result.similarity.rounded_percent(),
                grade = result.grade.as_str(),
                "Comparison complete"
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                terminal::display_comparison(&result);
            }

            if let Some(dest) = export {
                export_to(&config, &result.render_text(), &dest)?;
            }
        }

        Commands::Export {
            report,
            destination,
        } => {
            let text = std::fs::read_to_string(&report)
                .with_context(|| format!("Failed to read report {}", report.display()))?;
            export_to(&config, &text, &destination)?;
        }

        Commands::Status => {
            let analyzer = SentimentAnalyzer::load(
                config.sentiment_backend,
                config.lexicon_path.as_deref(),
            )?;
            docanalyzer::status::show(&config, &analyzer);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let analyzer = load_analyzer(&config)?;
            docanalyzer::web::run_server(config, analyzer, port, &bind).await?;
        }
    }

    Ok(())
}

/// Load the sentiment lexicons. A failure here stops the process before any
/// document is compared.
fn load_analyzer(config: &Config) -> Result<DocumentAnalyzer> {
    let scorer = SentimentAnalyzer::load(config.sentiment_backend, config.lexicon_path.as_deref())
        .context("Cannot start without a sentiment lexicon")?;
    Ok(DocumentAnalyzer::new(Arc::new(scorer)))
}

fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document {}", path.display()))
}

fn export_to(config: &Config, text: &str, dest: &Path) -> Result<()> {
    if ExportFormat::from_path(dest) == ExportFormat::Pdf {
        config.require_fonts()?;
    }
    let summary = export_report(text, dest, &config.export_settings())?;
    terminal::display_export_summary(&summary);
    if summary.format == ExportFormat::Text {
        println!("  {}", "Pages are separated by form feeds.".dimmed());
    }
    Ok(())
}
