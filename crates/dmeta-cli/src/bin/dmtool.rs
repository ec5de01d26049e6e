use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};

use dmeta_cli::commands::{config_ops, encode_ops, explain_ops, match_ops, snapshot_ops};
use dmeta_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "dmtool", about = "Double Metaphone encoding tool")]
struct Cli {
    /// Custom settings TOML (defaults to the embedded settings)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Directory for JSONL trace output (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode words into primary and secondary codes
    Encode {
        /// Words to encode
        words: Vec<String>,
        /// Also encode the words of this file (whitespace-separated)
        #[arg(long)]
        file: Option<String>,
        /// Cap code length (0 = no cap; default from settings)
        #[arg(long)]
        max_length: Option<usize>,
        /// Output JSON lines instead of tab-separated text
        #[arg(long)]
        json: bool,
    },
    /// Show every scan step for a word
    Explain {
        /// Word to explain
        word: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check whether two words share a code
    Match {
        a: String,
        b: String,
        /// Code length to compare at (default from [matching] settings)
        #[arg(long)]
        max_length: Option<usize>,
    },
    /// Encode the words of a file and record the codes to JSONL
    Snapshot {
        /// Path to the input file
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
        /// Cap code length (0 = no cap; default from settings)
        #[arg(long)]
        max_length: Option<usize>,
    },
    /// Compare current codes against a saved snapshot
    DiffSnapshot {
        /// Path to the input file
        input_file: String,
        /// Path to the baseline JSONL snapshot file
        baseline_file: String,
        /// Cap code length (0 = no cap; default from settings)
        #[arg(long)]
        max_length: Option<usize>,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        init_tracing(Path::new(dir));
    }

    if let Some(path) = &cli.settings {
        let content = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        });
        if let Err(e) = dmeta_core::settings::init_custom(content) {
            eprintln!("Error in {path}: {e}");
            std::process::exit(1);
        }
    }

    match cli.command {
        Command::Encode {
            words,
            file,
            max_length,
            json,
        } => encode_ops::encode_cmd(&words, file.as_deref(), max_length, json),
        Command::Explain { word, json } => explain_ops::explain_cmd(&word, json),
        Command::Match { a, b, max_length } => match_ops::match_cmd(&a, &b, max_length),
        Command::Snapshot {
            input_file,
            output_file,
            max_length,
        } => snapshot_ops::snapshot_cmd(&input_file, &output_file, max_length),
        Command::DiffSnapshot {
            input_file,
            baseline_file,
            max_length,
        } => snapshot_ops::diff_snapshot_cmd(&input_file, &baseline_file, max_length),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
