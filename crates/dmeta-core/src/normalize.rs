//! Input normalization and the context queries the rule table is built on.
//!
//! A [`Word`] is an uppercase copy of the input with a fixed logical length.
//! Every read outside `0..len` yields a blank, the same byte the classic
//! five-space padding would produce, so rules can look a few positions past
//! either end without bounds arithmetic of their own.

/// Byte read for any position outside the word.
pub const BLANK: u8 = b' ';

/// Lead byte of the two-byte UTF-8 forms of Latin-1 letters.
pub const LATIN_LEAD: u8 = 0xC3;

/// Trail byte of "Ç" after folding.
pub const C_CEDILLA_TRAIL: u8 = 0x87;

/// Trail byte of "Ñ" after folding.
pub const N_TILDE_TRAIL: u8 = 0x91;

/// Normalized working copy of one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    bytes: Vec<u8>,
    slavo_germanic: bool,
}

/// Uppercase `input` and compute its per-word heuristics.
///
/// ASCII `a..=z` fold to `A..=Z`. A byte in `0xA0..=0xBE` that follows the
/// Latin lead byte folds down by `0x20`, which turns "ç"/"ñ" into "Ç"/"Ñ".
pub fn normalize(input: impl AsRef<[u8]>) -> Word {
    let input = input.as_ref();
    let mut bytes = Vec::with_capacity(input.len());
    let mut after_lead = false;
    for &b in input {
        let folded = if b.is_ascii_lowercase() || (after_lead && (0xA0..=0xBE).contains(&b)) {
            b - 0x20
        } else {
            b
        };
        after_lead = folded == LATIN_LEAD;
        bytes.push(folded);
    }
    let slavo_germanic = contains(&bytes, b"W")
        || contains(&bytes, b"K")
        || contains(&bytes, b"CZ")
        || contains(&bytes, b"WITZ");
    Word {
        bytes,
        slavo_germanic,
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

impl Word {
    /// Logical length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Index of the last byte, `-1` for an empty word.
    pub fn last(&self) -> isize {
        self.bytes.len() as isize - 1
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn in_range(&self, pos: isize) -> bool {
        pos >= 0 && (pos as usize) < self.bytes.len()
    }

    /// Byte at `pos`, or [`BLANK`] outside the word.
    pub fn byte(&self, pos: isize) -> u8 {
        if self.in_range(pos) {
            self.bytes[pos as usize]
        } else {
            BLANK
        }
    }

    /// `pos` is inside the word and holds one of A, E, I, O, U, Y.
    pub fn is_vowel(&self, pos: isize) -> bool {
        self.in_range(pos) && matches!(self.byte(pos), b'A' | b'E' | b'I' | b'O' | b'U' | b'Y')
    }

    /// `pos` is inside the word and the bytes starting there spell one of
    /// `candidates`. The comparison may run into the blank region past the
    /// end, so `"IER "` matches a word ending in "IER".
    pub fn string_at(&self, pos: isize, candidates: &[&str]) -> bool {
        if !self.in_range(pos) {
            return false;
        }
        candidates.iter().any(|candidate| {
            candidate
                .bytes()
                .zip(pos..)
                .all(|(expected, at)| self.byte(at) == expected)
        })
    }

    /// `pos` is inside the word and holds one of `candidates`.
    pub fn char_at(&self, pos: isize, candidates: &[u8]) -> bool {
        self.in_range(pos) && candidates.contains(&self.byte(pos))
    }

    /// The word contains "W", "K", "CZ" or "WITZ".
    pub fn is_slavo_germanic(&self) -> bool {
        self.slavo_germanic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercases_ascii() {
        let w = normalize("Smith");
        assert_eq!(w.as_bytes(), b"SMITH");
        assert_eq!(w.len(), 5);
        assert_eq!(w.last(), 4);
    }

    #[test]
    fn test_folds_latin_accents() {
        assert_eq!(normalize("ç").as_bytes(), "Ç".as_bytes());
        assert_eq!(normalize("niño").as_bytes(), "NIÑO".as_bytes());
        // Not preceded by the lead byte: left alone.
        assert_eq!(normalize([b'A', 0xA7]).as_bytes(), &[b'A', 0xA7]);
    }

    #[test]
    fn test_empty_word() {
        let w = normalize("");
        assert!(w.is_empty());
        assert_eq!(w.last(), -1);
        assert_eq!(w.byte(0), BLANK);
        assert!(!w.string_at(0, &["A"]));
    }

    #[test]
    fn test_reads_outside_are_blank() {
        let w = normalize("AB");
        assert_eq!(w.byte(-1), BLANK);
        assert_eq!(w.byte(2), BLANK);
        assert_eq!(w.byte(100), BLANK);
    }

    #[test]
    fn test_string_at_runs_into_padding() {
        let w = normalize("ROGIER");
        assert!(w.string_at(3, &["IER "]));
        assert!(!w.string_at(6, &[" "]));
    }

    #[test]
    fn test_negative_positions_not_in_range() {
        let w = normalize("ACH");
        assert!(!w.string_at(-1, &[" AC"]));
        assert!(!w.char_at(-2, &[BLANK]));
        assert!(!w.is_vowel(-1));
    }

    #[test]
    fn test_char_at_ignores_padding() {
        let w = normalize("CH");
        assert!(!w.char_at(2, &[BLANK]));
        assert!(w.char_at(1, b"HX"));
    }

    #[test]
    fn test_vowels_include_y() {
        let w = normalize("YB");
        assert!(w.is_vowel(0));
        assert!(!w.is_vowel(1));
        assert!(!w.is_vowel(2));
    }

    #[test]
    fn test_slavo_germanic() {
        assert!(normalize("Kowalski").is_slavo_germanic());
        assert!(normalize("Wagner").is_slavo_germanic());
        assert!(normalize("Czerny").is_slavo_germanic());
        assert!(!normalize("Smith").is_slavo_germanic());
        assert!(!normalize("").is_slavo_germanic());
    }
}
