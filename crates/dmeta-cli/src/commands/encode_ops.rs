use std::path::Path;

use super::{encoder_for, read_words, WordCodes};

pub fn encode_cmd(words: &[String], file: Option<&str>, max_length: Option<usize>, json: bool) {
    let mut all: Vec<String> = words.to_vec();
    if let Some(path) = file {
        let from_file = die!(read_words(Path::new(path)), "Error reading {path}: {}");
        all.extend(from_file);
    }
    if all.is_empty() {
        eprintln!("Error: no words given (pass WORDS or --file)");
        std::process::exit(1);
    }

    let encoder = encoder_for(max_length);
    for word in &all {
        let wc = WordCodes::encode(&encoder, word);
        if json {
            let line = die!(serde_json::to_string(&wc), "JSON serialization failed: {}");
            println!("{line}");
        } else {
            println!("{}\t{}\t{}", wc.word, wc.primary, wc.secondary);
        }
    }
}
