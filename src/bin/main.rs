use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use lexbridge::adapter::{AnalysisMode, Analyzer, ProcessAnalyzer};
use lexbridge::analysis::{self, Mode};
use lexbridge::config;
use lexbridge::error::BridgeResult;
use lexbridge::legend::Legend;

/// Encode a document's semantic highlighting tokens via an external analyzer
#[derive(Parser)]
#[command(name = "lexbridge")]
#[command(version)]
#[command(about = "Encode a document's semantic highlighting tokens via an external analyzer")]
struct Cli {
    /// Path to the analyzer executable
    analyzer: PathBuf,

    /// Grammar/schema reference passed to the analyzer
    #[arg(long)]
    grammar: PathBuf,

    /// Classification mode: "flat" (lexer labels + table) or "annotated"
    /// (analyzer-chosen classifications)
    #[arg(long, default_value = "flat")]
    mode: String,

    /// JSON file with the flat-mode label table (default: the bundled
    /// grammar-language table)
    #[arg(long)]
    table: Option<PathBuf>,

    /// Document to highlight ("-" for stdin)
    #[arg(default_value = "-")]
    file: String,
}

fn run(cli: Cli) -> BridgeResult<Vec<analysis::EncodedToken>> {
    let text = if cli.file == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(&cli.file)?
    };

    let (analysis_mode, table, legend) = match cli.mode.as_str() {
        "annotated" => (AnalysisMode::Annotated, None, Legend::standard()),
        _ => {
            let table = match &cli.table {
                Some(path) => {
                    let raw = std::fs::read_to_string(path)?;
                    serde_json::from_str::<HashMap<String, String>>(&raw).map_err(|e| {
                        lexbridge::BridgeError::adapter_failure(format!(
                            "unparsable label table {}: {}",
                            path.display(),
                            e
                        ))
                    })?
                }
                None => config::grammar_label_table(),
            };
            let legend = if cli.table.is_some() {
                Legend::standard()
            } else {
                config::grammar_legend()
            };
            (AnalysisMode::Flat, Some(table), legend)
        }
    };

    let analyzer = ProcessAnalyzer::new(&cli.analyzer, &cli.grammar, analysis_mode);
    let descriptors = analyzer.analyze(&text)?;

    let mode = match &table {
        Some(table) => Mode::Flat(table),
        None => Mode::Annotated,
    };
    analysis::encode(&text, &descriptors, mode, &legend)
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(tokens) => {
            // One JSON array of five-integer tuples, ready for the editor.
            println!(
                "{}",
                serde_json::to_string(&tokens).expect("encoded tokens serialize to JSON")
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
