use std::fs;

use dmeta_core::Encoder;

use crate::commands::snapshot_ops::{diff_snapshot, read_snapshot, write_snapshot, SnapshotError};

#[test]
fn snapshot_round_trip_is_clean() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("words.txt");
    let output = dir.path().join("snap.jsonl");
    fs::write(&input, "# surnames\nSmith Schmidt\nKnight\n").unwrap();

    let enc = Encoder::new();
    assert_eq!(write_snapshot(&enc, &input, &output).unwrap(), 3);

    let snap = read_snapshot(&output).unwrap();
    assert_eq!(snap.len(), 3);
    assert_eq!(snap["Schmidt"].primary, "XMT");
    assert_eq!(snap["Schmidt"].secondary, "SMT");
    assert_eq!(snap["Knight"].primary, "NT");

    let diff = diff_snapshot(&enc, &input, &output).unwrap();
    assert!(diff.is_clean());
    assert_eq!(diff.total, 3);
    assert_eq!(diff.same, 3);
    assert!(diff.added.is_empty());
}

#[test]
fn diff_reports_changed_added_and_removed() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("words.txt");
    let baseline = dir.path().join("base.jsonl");
    fs::write(&input, "Smith\nJones\n").unwrap();
    fs::write(
        &baseline,
        concat!(
            r#"{"word":"Smith","primary":"SMT","secondary":"XMT"}"#,
            "\n",
            r#"{"word":"Knight","primary":"NT","secondary":"NT"}"#,
            "\n",
        ),
    )
    .unwrap();

    let diff = diff_snapshot(&Encoder::new(), &input, &baseline).unwrap();
    assert!(!diff.is_clean());
    assert_eq!(diff.changed.len(), 1);
    let (prev, current) = &diff.changed[0];
    assert_eq!(prev.primary, "SMT");
    assert_eq!(current.primary, "SM0");
    assert_eq!(diff.added.len(), 1);
    assert_eq!(diff.added[0].word, "Jones");
    assert_eq!(diff.removed, vec!["Knight".to_string()]);
}

#[test]
fn snapshot_respects_max_length() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("words.txt");
    let output = dir.path().join("snap.jsonl");
    fs::write(&input, "Jankelowicz\n").unwrap();

    write_snapshot(&Encoder::with_max_length(4), &input, &output).unwrap();
    let snap = read_snapshot(&output).unwrap();
    assert_eq!(snap["Jankelowicz"].primary, "JNKL");
    assert_eq!(snap["Jankelowicz"].secondary, "ANKL");

    // The full-length codes no longer agree with the capped baseline.
    let diff = diff_snapshot(&Encoder::new(), &input, &output).unwrap();
    assert_eq!(diff.changed.len(), 1);
}

#[test]
fn bad_baseline_line_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let baseline = dir.path().join("base.jsonl");
    fs::write(&baseline, "\n{\"word\":\"Smith\"}\n").unwrap();

    match read_snapshot(&baseline).unwrap_err() {
        SnapshotError::Json { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = write_snapshot(
        &Encoder::new(),
        &dir.path().join("nope.txt"),
        &dir.path().join("out.jsonl"),
    )
    .unwrap_err();
    assert!(matches!(err, SnapshotError::Io { .. }));
    assert!(err.to_string().contains("nope.txt"));
}
