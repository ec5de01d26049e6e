use super::Emission;
use crate::normalize::Word;

pub(super) fn encode(word: &Word, at: isize) -> Emission {
    // Also in the middle of a word.
    if word.string_at(at, &["WR"]) {
        return Emission::both("R", 2);
    }

    if at == 0 && (word.is_vowel(at + 1) || word.string_at(at, &["WH"])) {
        // "Wasserman" should match "Vasserman", "Uomo" should match "Womo".
        return if word.is_vowel(at + 1) {
            Emission::split("A", "F", 1)
        } else {
            Emission::both("A", 1)
        };
    }

    // "Arnow" should match "Arnoff".
    if (at == word.last() && word.is_vowel(at - 1))
        || word.string_at(at - 1, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
        || word.string_at(0, &["SCH"])
    {
        return Emission::secondary_only("F", 1);
    }

    // Polish "filipowicz"
    if word.string_at(at, &["WICZ", "WITZ"]) {
        return Emission::split("TS", "FX", 4);
    }

    Emission::silent(1)
}
