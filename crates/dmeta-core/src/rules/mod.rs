//! The Double Metaphone rule table.
//!
//! [`dispatch`] looks at the byte under the cursor and hands off to one
//! handler per letter. Each handler is a pure function of the word and the
//! cursor position and returns what to emit and how far to advance. The
//! denser letters (C, G, J, S, T, W) live in their own modules.

mod c;
mod consonants;
mod g;
mod j;
mod s;
mod t;
mod w;

use crate::normalize::{Word, C_CEDILLA_TRAIL, LATIN_LEAD, N_TILDE_TRAIL};

/// Leading clusters whose first letter is silent.
pub(crate) const SILENT_PREFIXES: &[&str] = &["GN", "KN", "PN", "WR", "PS"];

/// Output of one rule: a symbol for each code and the number of input bytes
/// consumed. A `None` symbol contributes nothing to that code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Emission {
    pub primary: Option<&'static str>,
    pub secondary: Option<&'static str>,
    pub advance: usize,
}

impl Emission {
    /// Same symbol for both codes.
    pub fn both(symbol: &'static str, advance: usize) -> Self {
        Self::split(symbol, symbol, advance)
    }

    pub fn split(primary: &'static str, secondary: &'static str, advance: usize) -> Self {
        Self {
            primary: Some(primary),
            secondary: Some(secondary),
            advance,
        }
    }

    pub fn primary_only(symbol: &'static str, advance: usize) -> Self {
        Self {
            primary: Some(symbol),
            secondary: None,
            advance,
        }
    }

    pub fn secondary_only(symbol: &'static str, advance: usize) -> Self {
        Self {
            primary: None,
            secondary: Some(symbol),
            advance,
        }
    }

    pub fn silent(advance: usize) -> Self {
        Self {
            primary: None,
            secondary: None,
            advance,
        }
    }
}

/// Advance past `letter` and, if the next byte repeats it, past that too.
pub(crate) fn skip_double(word: &Word, at: isize, letter: u8) -> usize {
    if word.byte(at + 1) == letter {
        2
    } else {
        1
    }
}

/// Apply the rule for the byte at `at`. Total over all byte values.
pub(crate) fn dispatch(word: &Word, at: isize) -> Emission {
    match word.byte(at) {
        b'A' | b'E' | b'I' | b'O' | b'U' | b'Y' => vowel(at),
        b'B' => consonants::b(word, at),
        b'C' => c::encode(word, at),
        b'D' => consonants::d(word, at),
        b'F' => Emission::both("F", skip_double(word, at, b'F')),
        b'G' => g::encode(word, at),
        b'H' => consonants::h(word, at),
        b'J' => j::encode(word, at),
        b'K' => Emission::both("K", skip_double(word, at, b'K')),
        b'L' => consonants::l(word, at),
        b'M' => consonants::m(word, at),
        b'N' => Emission::both("N", skip_double(word, at, b'N')),
        b'P' => consonants::p(word, at),
        b'Q' => Emission::both("K", skip_double(word, at, b'Q')),
        b'R' => consonants::r(word, at),
        b'S' => s::encode(word, at),
        b'T' => t::encode(word, at),
        b'V' => Emission::both("F", skip_double(word, at, b'V')),
        b'W' => w::encode(word, at),
        b'X' => consonants::x(word, at),
        b'Z' => consonants::z(word, at),
        LATIN_LEAD => latin(word, at),
        _ => Emission::silent(1),
    }
}

/// Vowels only count at the start of the word, and all map to "A".
fn vowel(at: isize) -> Emission {
    if at == 0 {
        Emission::both("A", 1)
    } else {
        Emission::silent(1)
    }
}

/// Two-byte "Ç" and "Ñ". Any other trail byte is skipped on its own.
fn latin(word: &Word, at: isize) -> Emission {
    match word.byte(at + 1) {
        C_CEDILLA_TRAIL => Emission::both("S", 2),
        N_TILDE_TRAIL => Emission::both("N", 2),
        _ => Emission::silent(1),
    }
}
