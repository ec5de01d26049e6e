use super::{skip_double, Emission};
use crate::normalize::Word;

pub(super) fn encode(word: &Word, at: isize) -> Emission {
    // Obvious Spanish: "jose", "san jacinto"
    if word.string_at(at, &["JOSE"]) || word.string_at(0, &["SAN "]) {
        return if (at == 0 && word.byte(at + 4) == b' ') || word.string_at(0, &["SAN "]) {
            Emission::both("H", 1)
        } else {
            Emission::split("J", "H", 1)
        };
    }

    let advance = skip_double(word, at, b'J');

    if at == 0 {
        // "Yankelovich" / "Jankelowicz"
        return Emission::split("J", "A", advance);
    }

    // Spanish "bajador"
    if word.is_vowel(at - 1) && !word.is_slavo_germanic() && word.char_at(at + 1, b"AO") {
        return Emission::split("J", "H", advance);
    }

    if at == word.last() {
        return Emission::primary_only("J", advance);
    }

    if !word.char_at(at + 1, b"LTKSNMBZ") && !word.char_at(at - 1, b"SKL") {
        Emission::both("J", advance)
    } else {
        Emission::silent(advance)
    }
}
