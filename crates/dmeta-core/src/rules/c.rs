//! C has the densest branch set in the table: Germanic "-ACH-", Italian
//! "-CIA-" and "-CC-", the CH family, CZ, and the "Mac Caffrey" spacing.

use super::Emission;
use crate::normalize::Word;

pub(super) fn encode(word: &Word, at: isize) -> Emission {
    // Germanic "-ACH-" but not "-ACHI-", "-ACHE-" except "BACHER"/"MACHER".
    if at > 1
        && !word.is_vowel(at - 2)
        && word.string_at(at - 1, &["ACH"])
        && word.byte(at + 2) != b'I'
        && (word.byte(at + 2) != b'E' || word.string_at(at - 2, &["BACHER", "MACHER"]))
    {
        return Emission::both("K", 2);
    }

    if at == 0 && word.string_at(at, &["CAESAR"]) {
        return Emission::both("S", 1);
    }

    // Italian "chianti"
    if word.string_at(at, &["CHIA"]) {
        return Emission::both("K", 2);
    }

    if word.string_at(at, &["CH"]) {
        return ch(word, at);
    }

    // "czerny", but not "-WICZ"
    if word.string_at(at, &["CZ"]) && !word.string_at(at - 2, &["WICZ"]) {
        return Emission::split("S", "X", 2);
    }

    // "focaccia"
    if word.string_at(at + 1, &["CIA"]) {
        return Emission::both("X", 2);
    }

    // Double C, but not "McClellan".
    if word.string_at(at, &["CC"]) && !(at == 1 && word.byte(0) == b'M') {
        return cc(word, at);
    }

    if word.string_at(at, &["CK", "CG", "CQ"]) {
        return Emission::both("K", 2);
    }

    if word.string_at(at, &["CI", "CE", "CY"]) {
        return if word.string_at(at, &["CIO", "CIE", "CIA"]) {
            Emission::split("S", "X", 1)
        } else {
            Emission::both("S", 1)
        };
    }

    // "mac caffrey", "mac gregor"
    let advance = if word.string_at(at + 1, &[" C", " Q", " G"]) {
        3
    } else if word.char_at(at + 1, b"CKQ") && !word.string_at(at + 1, &["CE", "CI"]) {
        2
    } else {
        1
    };
    Emission::both("K", advance)
}

fn ch(word: &Word, at: isize) -> Emission {
    // "michael"
    if at > 0 && word.string_at(at, &["CHAE"]) {
        return Emission::split("K", "X", 2);
    }

    // Greek roots: "chemistry", "chorus", but not "chore".
    if at == 0
        && (word.string_at(at + 1, &["HARAC", "HARIS"])
            || word.string_at(at + 1, &["HOR", "HYM", "HIA", "HEM"]))
        && !word.string_at(0, &["CHORE"])
    {
        return Emission::both("K", 2);
    }

    // Germanic or Greek "kh": "architect" but not "arch", "orchestra",
    // "orchid"; "wachtler", "wechsler" but not "tichner".
    let hard = word.string_at(0, &["VAN ", "VON "])
        || word.string_at(0, &["SCH"])
        || word.string_at(at - 2, &["ORCHES", "ARCHIT", "ORCHID"])
        || word.char_at(at + 2, b"TS")
        || ((word.char_at(at - 1, b"AOUE") || at == 0)
            && word.char_at(at + 2, b"LRNMBHFVW "));
    if hard {
        return Emission::both("K", 2);
    }

    if at == 0 {
        Emission::both("X", 2)
    } else if word.string_at(0, &["MC"]) {
        // "McHugh"
        Emission::both("K", 2)
    } else {
        Emission::split("X", "K", 2)
    }
}

fn cc(word: &Word, at: isize) -> Emission {
    // "bellocchio" but not "bacchus"
    if word.char_at(at + 2, b"IEH") && !word.string_at(at + 2, &["HU"]) {
        let advance = if word.is_vowel(at + 2) { 2 } else { 3 };
        // "accident", "accede", "succeed" vs. "bacci", "bertucci"
        return if (at == 1 && word.byte(at - 1) == b'A')
            || word.string_at(at - 1, &["UCCEE", "UCCES"])
        {
            Emission::both("KS", advance)
        } else {
            Emission::both("X", advance)
        };
    }
    // Pierce's rule
    Emission::both("K", 2)
}
