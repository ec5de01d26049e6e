mod snapshot;

use std::fs;

use dmeta_core::Encoder;

use super::{encoder_for, read_words, WordCodes};

#[test]
fn test_read_words_skips_comments() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, "# names\nSmith  Schmidt\n\n  Knight\n#Jones\n").unwrap();
    assert_eq!(read_words(&path).unwrap(), vec!["Smith", "Schmidt", "Knight"]);
}

#[test]
fn test_word_codes() {
    let wc = WordCodes::encode(&Encoder::with_max_length(2), "Schmidt");
    assert_eq!(wc.word, "Schmidt");
    assert_eq!(wc.primary, "XM");
    assert_eq!(wc.secondary, "SM");
}

#[test]
fn test_encoder_for_override() {
    assert_eq!(encoder_for(Some(0)).max_length(), None);
    assert_eq!(encoder_for(Some(3)).max_length(), Some(3));
}
