use super::Emission;
use crate::normalize::Word;

pub(super) fn encode(word: &Word, at: isize) -> Emission {
    // "island", "isle", "carlisle", "carlysle"
    if word.string_at(at - 1, &["ISL", "YSL"]) {
        return Emission::silent(1);
    }

    // "sugar-"
    if at == 0 && word.string_at(at, &["SUGAR"]) {
        return Emission::split("X", "S", 1);
    }

    if word.string_at(at, &["SH"]) {
        // Germanic
        return if word.string_at(at + 1, &["HEIM", "HOEK", "HOLM", "HOLZ"]) {
            Emission::both("S", 2)
        } else {
            Emission::both("X", 2)
        };
    }

    // Italian and Armenian
    if word.string_at(at, &["SIO", "SIA"]) || word.string_at(at, &["SIAN"]) {
        return if word.is_slavo_germanic() {
            Emission::both("S", 1)
        } else {
            Emission::split("S", "X", 1)
        };
    }

    // German and anglicisations: "smith" matches "schmidt", "snider"
    // matches "schneider". Also -SZ- in Slavic languages, although
    // Hungarian pronounces it S.
    if (at == 0 && word.char_at(at + 1, b"MNLW")) || word.byte(at + 1) == b'Z' {
        let advance = if word.byte(at + 1) == b'Z' { 2 } else { 1 };
        return Emission::split("S", "X", advance);
    }

    if word.string_at(at, &["SC"]) {
        return sc(word, at);
    }

    let advance = if word.char_at(at + 1, b"SZ") { 2 } else { 1 };
    // French "resnais", "artois"
    if at == word.last() && word.string_at(at - 2, &["AI", "OI"]) {
        Emission::secondary_only("S", advance)
    } else {
        Emission::both("S", advance)
    }
}

/// Schlesinger's rule and the Dutch "SCH" forms.
fn sc(word: &Word, at: isize) -> Emission {
    if word.byte(at + 2) == b'H' {
        // Dutch origin: "school", "schooner"
        if word.string_at(at + 3, &["OO", "ER", "EN", "UY", "ED", "EM"]) {
            // "schermerhorn", "schenker"
            return if word.string_at(at + 3, &["ER", "EN"]) {
                Emission::split("X", "SK", 3)
            } else {
                Emission::both("SK", 3)
            };
        }
        return if at == 0 && !word.is_vowel(3) && word.byte(3) != b'W' {
            Emission::split("X", "S", 3)
        } else {
            Emission::both("X", 3)
        };
    }

    if word.char_at(at + 2, b"IEY") {
        return Emission::both("S", 2);
    }

    let advance = if word.is_vowel(at + 2) || at + 2 >= word.len() as isize {
        2
    } else {
        3
    };
    Emission::both("SK", advance)
}
