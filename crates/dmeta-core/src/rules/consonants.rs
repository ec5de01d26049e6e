//! Letters whose rules fit in a few lines: B, D, H, L, M, P, R, X, Z.

use super::{skip_double, Emission};
use crate::normalize::Word;

/// "-mb" as in "dumb" is handled by M, so B is always P.
pub(super) fn b(word: &Word, at: isize) -> Emission {
    Emission::both("P", skip_double(word, at, b'B'))
}

pub(super) fn d(word: &Word, at: isize) -> Emission {
    if word.string_at(at, &["DG"]) {
        // "edge" vs. "edgar"
        return if word.char_at(at + 2, b"IEY") {
            Emission::both("J", 2)
        } else {
            Emission::both("TK", 2)
        };
    }
    if word.string_at(at, &["DT", "DD"]) {
        return Emission::both("T", 2);
    }
    Emission::both("T", 1)
}

/// Kept only at the start or between vowels, and only before a vowel.
pub(super) fn h(word: &Word, at: isize) -> Emission {
    if (at == 0 || word.is_vowel(at - 1)) && word.is_vowel(at + 1) {
        Emission::both("H", 1)
    } else {
        Emission::silent(1)
    }
}

pub(super) fn l(word: &Word, at: isize) -> Emission {
    if word.byte(at + 1) != b'L' {
        return Emission::both("L", 1);
    }
    // Spanish "cabrillo", "gallegos": the secondary drops the L.
    let last = word.last();
    if (at == word.len() as isize - 3 && word.string_at(at - 1, &["ILLO", "ILLA", "ALLE"]))
        || ((word.string_at(last - 1, &["AS", "OS"]) || word.char_at(last, b"AO"))
            && word.string_at(at - 1, &["ALLE"]))
    {
        return Emission::primary_only("L", 2);
    }
    Emission::both("L", 2)
}

pub(super) fn m(word: &Word, at: isize) -> Emission {
    // "dumb", "thumb", "dumber"
    let silent_b = word.string_at(at - 1, &["UMB"])
        && (at + 1 == word.last() || word.string_at(at + 2, &["ER"]));
    if silent_b || word.byte(at + 1) == b'M' {
        Emission::both("M", 2)
    } else {
        Emission::both("M", 1)
    }
}

pub(super) fn p(word: &Word, at: isize) -> Emission {
    if word.byte(at + 1) == b'H' {
        return Emission::both("F", 2);
    }
    // "campbell", "raspberry"
    if word.char_at(at + 1, b"PB") {
        Emission::both("P", 2)
    } else {
        Emission::both("P", 1)
    }
}

pub(super) fn r(word: &Word, at: isize) -> Emission {
    let advance = skip_double(word, at, b'R');
    // French "rogier", but not "hochmeier".
    if at == word.last()
        && !word.is_slavo_germanic()
        && word.string_at(at - 2, &["IE"])
        && !word.string_at(at - 4, &["ME", "MA"])
    {
        Emission::secondary_only("R", advance)
    } else {
        Emission::both("R", advance)
    }
}

pub(super) fn x(word: &Word, at: isize) -> Emission {
    let advance = if word.char_at(at + 1, b"CX") { 2 } else { 1 };
    // French "breaux"
    let silent = at == word.last()
        && (word.string_at(at - 3, &["IAU", "EAU"]) || word.string_at(at - 2, &["AU", "OU"]));
    if silent {
        Emission::silent(advance)
    } else {
        Emission::both("KS", advance)
    }
}

pub(super) fn z(word: &Word, at: isize) -> Emission {
    // Pinyin "zhao"
    if word.byte(at + 1) == b'H' {
        return Emission::both("J", 2);
    }
    let advance = skip_double(word, at, b'Z');
    if word.string_at(at + 1, &["ZO", "ZI", "ZA"])
        || (word.is_slavo_germanic() && at > 0 && word.byte(at - 1) != b'T')
    {
        Emission::split("S", "TS", advance)
    } else {
        Emission::both("S", advance)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::rule;
    use super::*;

    #[test]
    fn test_b() {
        assert_eq!(rule("BOB", 0), Emission::both("P", 1));
        assert_eq!(rule("ABBY", 1), Emission::both("P", 2));
    }

    #[test]
    fn test_d() {
        assert_eq!(rule("EDGE", 1), Emission::both("J", 2));
        assert_eq!(rule("EDGAR", 1), Emission::both("TK", 2));
        assert_eq!(rule("TODD", 2), Emission::both("T", 2));
        assert_eq!(rule("SCHMIDT", 5), Emission::both("T", 2));
        assert_eq!(rule("DAN", 0), Emission::both("T", 1));
    }

    #[test]
    fn test_h() {
        assert_eq!(rule("HUGH", 0), Emission::both("H", 1));
        assert_eq!(rule("AHA", 1), Emission::both("H", 1));
        assert_eq!(rule("HUGH", 3), Emission::silent(1));
        assert_eq!(rule("BHUT", 1), Emission::silent(1));
    }

    #[test]
    fn test_l_spanish() {
        assert_eq!(rule("CABRILLO", 5), Emission::primary_only("L", 2));
        assert_eq!(rule("GALLEGOS", 2), Emission::primary_only("L", 2));
        assert_eq!(rule("BALL", 2), Emission::both("L", 2));
        assert_eq!(rule("LOLA", 0), Emission::both("L", 1));
    }

    #[test]
    fn test_m_silent_b() {
        assert_eq!(rule("DUMB", 2), Emission::both("M", 2));
        assert_eq!(rule("DUMBER", 2), Emission::both("M", 2));
        assert_eq!(rule("NUMBAT", 2), Emission::both("M", 1));
        assert_eq!(rule("HAMMER", 2), Emission::both("M", 2));
    }

    #[test]
    fn test_p() {
        assert_eq!(rule("PHIL", 0), Emission::both("F", 2));
        assert_eq!(rule("CAMPBELL", 3), Emission::both("P", 2));
        assert_eq!(rule("APPLE", 1), Emission::both("P", 2));
        assert_eq!(rule("PAT", 0), Emission::both("P", 1));
    }

    #[test]
    fn test_r_french_ending() {
        assert_eq!(rule("ROGIER", 5), Emission::secondary_only("R", 1));
        assert_eq!(rule("HOCHMEIER", 8), Emission::both("R", 1));
        // Slavo-Germanic words keep the R.
        assert_eq!(rule("KRAMIER", 6), Emission::both("R", 1));
        assert_eq!(rule("BARR", 2), Emission::both("R", 2));
    }

    #[test]
    fn test_x() {
        assert_eq!(rule("BREAUX", 5), Emission::silent(1));
        assert_eq!(rule("DOUX", 3), Emission::silent(1));
        assert_eq!(rule("MAX", 2), Emission::both("KS", 1));
        assert_eq!(rule("EXCEL", 1), Emission::both("KS", 2));
        assert_eq!(rule("AUXERRE", 2), Emission::both("KS", 1));
    }

    #[test]
    fn test_z() {
        assert_eq!(rule("ZHAO", 0), Emission::both("J", 2));
        assert_eq!(rule("MOZZARELLA", 2), Emission::split("S", "TS", 2));
        assert_eq!(rule("ZOE", 0), Emission::both("S", 1));
        // Slavo-Germanic, not after T.
        assert_eq!(rule("KAZAN", 2), Emission::split("S", "TS", 1));
        assert_eq!(rule("KATZ", 3), Emission::both("S", 1));
    }
}
