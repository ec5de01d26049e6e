use super::{skip_double, Emission};
use crate::normalize::Word;

const GERMANIC_PREFIXES: &[&str] = &["VAN ", "VON "];

/// Two-letter continuations that soften a word-initial G.
const INITIAL_SOFT: &[&str] = &[
    "ES", "EP", "EB", "EL", "EY", "IB", "IL", "IN", "IE", "EI", "ER",
];

pub(super) fn encode(word: &Word, at: isize) -> Emission {
    if word.byte(at + 1) == b'H' {
        return gh(word, at);
    }

    if word.byte(at + 1) == b'N' {
        let sg = word.is_slavo_germanic();
        return if at == 1 && word.is_vowel(0) && !sg {
            Emission::split("KN", "N", 2)
        } else if !word.string_at(at + 2, &["EY"]) && !sg {
            // not "cagney"
            Emission::split("N", "KN", 2)
        } else {
            Emission::both("KN", 2)
        };
    }

    // "tagliaro"
    if word.string_at(at + 1, &["LI"]) && !word.is_slavo_germanic() {
        return Emission::split("KL", "L", 2);
    }

    // -ges-, -gep-, -gel-, -gie- at the beginning
    if at == 0 && (word.byte(at + 1) == b'Y' || word.string_at(at + 1, INITIAL_SOFT)) {
        return Emission::split("K", "J", 1);
    }

    // -ger-, -gy-
    if (word.string_at(at + 1, &["ER"]) || word.byte(at + 1) == b'Y')
        && !word.string_at(0, &["DANGER", "RANGER", "MANGER"])
        && !word.char_at(at - 1, b"EI")
        && !word.string_at(at - 1, &["RGY", "OGY"])
    {
        return Emission::split("K", "J", 1);
    }

    // Italian "biaggi"
    if word.char_at(at + 1, b"EIY") || word.string_at(at - 1, &["AGGI", "OGGI"]) {
        let advance = if word.is_vowel(at + 1) { 1 } else { 2 };
        return if word.string_at(0, GERMANIC_PREFIXES)
            || word.string_at(0, &["SCH"])
            || word.string_at(at + 1, &["ET"])
        {
            Emission::both("K", advance)
        } else if word.string_at(at + 1, &["IER "]) {
            // French ending is always soft.
            Emission::both("J", advance)
        } else {
            Emission::split("J", "K", advance)
        };
    }

    Emission::both("K", skip_double(word, at, b'G'))
}

fn gh(word: &Word, at: isize) -> Emission {
    if at > 0 && !word.is_vowel(at - 1) {
        return Emission::both("K", 2);
    }

    // "ghislane", "ghiradelli"
    if at == 0 {
        return if word.byte(at + 2) == b'I' {
            Emission::both("J", 2)
        } else {
            Emission::both("K", 2)
        };
    }

    // Parker's rule: "hugh", "bough", "broughton"
    if (at > 1 && word.char_at(at - 2, b"BHD"))
        || (at > 2 && word.char_at(at - 3, b"BHD"))
        || (at > 3 && word.char_at(at - 4, b"BH"))
    {
        return Emission::silent(2);
    }

    // "laugh", "McLaughlin", "cough", "gough", "rough", "tough"
    if at > 2 && word.byte(at - 1) == b'U' && word.char_at(at - 3, b"CGLRT") {
        Emission::both("F", 2)
    } else if word.byte(at - 1) != b'I' {
        Emission::both("K", 2)
    } else {
        Emission::silent(2)
    }
}
