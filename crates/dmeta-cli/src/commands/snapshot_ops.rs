//! JSONL snapshots of encoder output, for catching rule regressions.
//!
//! A snapshot holds one [`WordCodes`] per line. `diff_snapshot` re-encodes the
//! input words and compares them with a saved baseline.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use dmeta_core::Encoder;

use super::{encoder_for, read_words, WordCodes};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}:{line}: {source}", .path.display())]
    Json {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> SnapshotError {
    let path = path.to_path_buf();
    move |source| SnapshotError::Io { path, source }
}

/// Encode every word of `input` and write the snapshot to `output`.
/// Returns the number of entries written.
pub fn write_snapshot(
    encoder: &Encoder,
    input: &Path,
    output: &Path,
) -> Result<usize, SnapshotError> {
    let words = read_words(input).map_err(io_err(input))?;
    let file = fs::File::create(output).map_err(io_err(output))?;
    let mut writer = BufWriter::new(file);

    for (i, word) in words.iter().enumerate() {
        let entry = WordCodes::encode(encoder, word);
        serde_json::to_writer(&mut writer, &entry).map_err(|source| SnapshotError::Json {
            path: output.to_path_buf(),
            line: i + 1,
            source,
        })?;
        writeln!(writer).map_err(io_err(output))?;
    }
    writer.flush().map_err(io_err(output))?;
    Ok(words.len())
}

/// Read a snapshot back, keyed by word. Later lines win for repeated words.
pub fn read_snapshot(path: &Path) -> Result<HashMap<String, WordCodes>, SnapshotError> {
    let content = fs::read_to_string(path).map_err(io_err(path))?;
    let mut entries = HashMap::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry: WordCodes =
            serde_json::from_str(line).map_err(|source| SnapshotError::Json {
                path: path.to_path_buf(),
                line: i + 1,
                source,
            })?;
        entries.insert(entry.word.clone(), entry);
    }
    Ok(entries)
}

#[derive(Debug, Default)]
pub struct SnapshotDiff {
    pub total: usize,
    pub same: usize,
    /// `(baseline, current)` pairs whose codes differ.
    pub changed: Vec<(WordCodes, WordCodes)>,
    pub added: Vec<WordCodes>,
    /// Baseline words no longer in the input, sorted.
    pub removed: Vec<String>,
}

impl SnapshotDiff {
    /// New words alone do not count as a regression.
    pub fn is_clean(&self) -> bool {
        self.changed.is_empty() && self.removed.is_empty()
    }
}

/// Re-encode the words of `input` and compare against `baseline`.
pub fn diff_snapshot(
    encoder: &Encoder,
    input: &Path,
    baseline: &Path,
) -> Result<SnapshotDiff, SnapshotError> {
    let words = read_words(input).map_err(io_err(input))?;
    let base = read_snapshot(baseline)?;

    let mut diff = SnapshotDiff {
        total: words.len(),
        ..SnapshotDiff::default()
    };
    for word in &words {
        let current = WordCodes::encode(encoder, word);
        match base.get(word) {
            Some(prev) if *prev == current => diff.same += 1,
            Some(prev) => diff.changed.push((prev.clone(), current)),
            None => diff.added.push(current),
        }
    }

    let input_set: HashSet<&str> = words.iter().map(String::as_str).collect();
    diff.removed = base
        .keys()
        .filter(|k| !input_set.contains(k.as_str()))
        .cloned()
        .collect();
    diff.removed.sort();
    Ok(diff)
}

pub fn snapshot_cmd(input_file: &str, output_file: &str, max_length: Option<usize>) {
    let count = die!(
        write_snapshot(
            &encoder_for(max_length),
            Path::new(input_file),
            Path::new(output_file)
        ),
        "Snapshot failed: {}"
    );
    eprintln!("Snapshot written: {count} words -> {output_file}");
}

pub fn diff_snapshot_cmd(input_file: &str, baseline_file: &str, max_length: Option<usize>) {
    let diff = die!(
        diff_snapshot(
            &encoder_for(max_length),
            Path::new(input_file),
            Path::new(baseline_file)
        ),
        "Diff failed: {}"
    );

    for (prev, current) in &diff.changed {
        println!(
            "  CHANGED: {} -> {}/{} (was: {}/{})",
            current.word, current.primary, current.secondary, prev.primary, prev.secondary
        );
    }
    for entry in &diff.added {
        println!(
            "  NEW:     {} -> {}/{}",
            entry.word, entry.primary, entry.secondary
        );
    }
    for word in &diff.removed {
        println!("  REMOVED: {word}");
    }

    println!();
    println!("=== Summary ===");
    println!("  Total:    {}", diff.total);
    println!("  Same:     {}", diff.same);
    println!("  Changed:  {}", diff.changed.len());
    println!("  New:      {}", diff.added.len());
    println!("  Removed:  {}", diff.removed.len());

    if !diff.is_clean() {
        std::process::exit(1);
    }
}
