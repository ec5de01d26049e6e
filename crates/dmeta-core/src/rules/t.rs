use super::Emission;
use crate::normalize::Word;

pub(super) fn encode(word: &Word, at: isize) -> Emission {
    if word.string_at(at, &["TION"]) || word.string_at(at, &["TIA"]) {
        return Emission::both("X", 1);
    }

    if word.string_at(at, &["TCH"]) {
        return Emission::both("X", 3);
    }

    if word.string_at(at, &["TH"]) || word.string_at(at, &["TTH"]) {
        // "thomas", "thames", or Germanic
        return if word.string_at(at + 2, &["OM", "AM"])
            || word.string_at(0, &["VAN ", "VON "])
            || word.string_at(0, &["SCH"])
        {
            Emission::both("T", 2)
        } else {
            Emission::split("0", "T", 2)
        };
    }

    let advance = if word.char_at(at + 1, b"TD") { 2 } else { 1 };
    Emission::both("T", advance)
}
