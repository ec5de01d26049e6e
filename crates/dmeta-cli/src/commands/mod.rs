use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use dmeta_core::Encoder;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod encode_ops;
pub mod explain_ops;
pub mod match_ops;
pub mod snapshot_ops;

/// One encoded word, as printed by `encode --json` and stored in snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCodes {
    pub word: String,
    pub primary: String,
    pub secondary: String,
}

impl WordCodes {
    pub fn encode(encoder: &Encoder, word: &str) -> Self {
        let codes = encoder.encode(word);
        Self {
            word: word.to_string(),
            primary: codes.primary,
            secondary: codes.secondary,
        }
    }
}

/// Words from a text file: blank lines and `#` comments are skipped, the rest
/// is split on whitespace.
pub fn read_words(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect())
}

/// Encoder for a `--max-length` override, falling back to `[encoding]`.
/// An override of 0 lifts the cap.
pub fn encoder_for(max_length: Option<usize>) -> Encoder {
    match max_length {
        Some(0) => Encoder::new(),
        Some(n) => Encoder::with_max_length(n),
        None => Encoder::from_settings(dmeta_core::settings::settings()),
    }
}

#[cfg(test)]
mod tests;
