//! The left-to-right scan over a normalized word.
//!
//! [`Steps`] yields one [`Step`] per rule application, in cursor order. The
//! two pre-scan fixups (silent leading cluster, initial X) are reported as
//! ordinary steps of length 1 at position 0, so the step ranges always tile
//! the word exactly.

use std::iter::FusedIterator;

use crate::normalize::{normalize, Word};
use crate::rules::{dispatch, SILENT_PREFIXES};

/// One scan step: what it contributes to each code and which input bytes it
/// consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub primary: Option<&'static str>,
    pub secondary: Option<&'static str>,
    /// Byte offset of the first consumed byte.
    pub start: usize,
    /// Number of bytes consumed, always at least 1.
    pub len: usize,
}

impl Step {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    SilentPrefix,
    InitialX,
    Scan,
}

/// Lazy sequence of scan steps for one word.
#[derive(Debug, Clone)]
pub struct Steps {
    word: Word,
    cursor: usize,
    phase: Phase,
}

/// Start scanning `word`.
pub fn steps(word: impl AsRef<[u8]>) -> Steps {
    Steps {
        word: normalize(word),
        cursor: 0,
        phase: Phase::SilentPrefix,
    }
}

/// Feed every scan step of `word` to `sink`, in cursor order.
pub fn for_each_step(word: impl AsRef<[u8]>, mut sink: impl FnMut(Step)) {
    for step in steps(word) {
        sink(step);
    }
}

impl Steps {
    /// The normalized word being scanned.
    pub fn word(&self) -> &Word {
        &self.word
    }
}

impl Iterator for Steps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.phase == Phase::SilentPrefix {
            self.phase = Phase::InitialX;
            if self.word.string_at(0, SILENT_PREFIXES) {
                self.cursor += 1;
                return Some(Step {
                    primary: None,
                    secondary: None,
                    start: 0,
                    len: 1,
                });
            }
        }

        if self.phase == Phase::InitialX {
            self.phase = Phase::Scan;
            // Initial X sounds like Z, which maps to S: "Xavier".
            if self.word.byte(0) == b'X' {
                self.cursor += 1;
                return Some(Step {
                    primary: Some("S"),
                    secondary: Some("S"),
                    start: 0,
                    len: 1,
                });
            }
        }

        if self.cursor >= self.word.len() {
            return None;
        }
        let start = self.cursor;
        let emission = dispatch(&self.word, start as isize);
        debug_assert!(emission.advance >= 1);
        self.cursor += emission.advance;
        Some(Step {
            primary: emission.primary,
            secondary: emission.secondary,
            start,
            len: emission.advance,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.word.len().saturating_sub(self.cursor);
        let pending_fixups = match self.phase {
            Phase::SilentPrefix => 2,
            Phase::InitialX => 1,
            Phase::Scan => 0,
        };
        (0, Some(remaining + pending_fixups))
    }
}

impl FusedIterator for Steps {}
