//! Ordered substitution tables for both directions.
//!
//! Order is load-bearing: entries are applied strictly top to bottom,
//! so every multi-codepoint pattern must appear before any shorter
//! pattern sharing its leading character (enforced by a test below).
//! Accented letters are listed in both Unicode spellings, precomposed
//! and base letter + combining mark, so either input encoding maps to
//! the same Cyrillic letter.

/// Latin→Cyrillic, applied per word.
///
/// Layout: two-letter digraphs (including forms spelled with a Cyrillic
/// Ј/ј and the single-codepoint digraph ligatures Ǉ/ǈ/ǉ…), then capital
/// letters, then lowercase. The ae/oe/ﬁ/ﬂ/ﬆ/ĳ ligatures expand to their
/// two-letter Cyrillic spellings.
pub const LATIN_TO_CYRILLIC: &[(&str, &str)] = &[
    // Digraphs
    ("DJ", "Ђ"),
    ("DЈ", "Ђ"), // D + Cyrillic Ј
    ("Dj", "Ђ"),
    ("Dј", "Ђ"), // D + Cyrillic ј
    ("LJ", "Љ"),
    ("LЈ", "Љ"),
    ("\u{1C7}", "Љ"), // Ǉ ligature
    ("Lj", "Љ"),
    ("Lј", "Љ"),
    ("\u{1C8}", "Љ"), // ǈ ligature
    ("NJ", "Њ"),
    ("NЈ", "Њ"),
    ("\u{1CA}", "Њ"), // Ǌ ligature
    ("Nj", "Њ"),
    ("Nј", "Њ"),
    ("\u{1CB}", "Њ"), // ǋ ligature
    ("DŽ", "Џ"),
    ("\u{1C4}", "Џ"), // Ǆ ligature
    ("DZ\u{30C}", "Џ"), // D + Z with combining caron
    ("Dž", "Џ"),
    ("\u{1C5}", "Џ"), // ǅ ligature
    ("Dz\u{30C}", "Џ"),
    ("dj", "ђ"),
    ("dј", "ђ"), // d + Cyrillic ј
    ("lj", "љ"),
    ("lј", "љ"),
    ("\u{1C9}", "љ"), // ǉ ligature
    ("nj", "њ"),
    ("nј", "њ"),
    ("\u{1CC}", "њ"), // ǌ ligature
    ("dž", "џ"),
    ("\u{1C6}", "џ"), // ǆ ligature
    ("dz\u{30C}", "џ"),
    // Capitals; combining-mark spellings precede the bare letter
    ("A", "А"),
    ("B", "Б"),
    ("V", "В"),
    ("G", "Г"),
    ("D", "Д"),
    ("Đ", "Ђ"),
    ("Ð", "Ђ"),
    ("\u{1D06}", "Ђ"), // ᴆ
    ("E", "Е"),
    ("Ž", "Ж"),
    ("Z\u{30C}", "Ж"),
    ("Z", "З"),
    ("I", "И"),
    ("J", "Ј"),
    ("K", "К"),
    ("L", "Л"),
    ("M", "М"),
    ("N", "Н"),
    ("O", "О"),
    ("P", "П"),
    ("R", "Р"),
    ("Š", "Ш"),
    ("S\u{30C}", "Ш"),
    ("S", "С"),
    ("T", "Т"),
    ("Ć", "Ћ"),
    ("C\u{301}", "Ћ"),
    ("U", "У"),
    ("F", "Ф"),
    ("H", "Х"),
    ("Č", "Ч"),
    ("C\u{30C}", "Ч"),
    ("C", "Ц"),
    // Lowercase
    ("a", "а"),
    ("æ", "ае"),
    ("b", "б"),
    ("v", "в"),
    ("g", "г"),
    ("d", "д"),
    ("đ", "ђ"),
    ("e", "е"),
    ("ž", "ж"),
    ("z\u{30C}", "ж"),
    ("z", "з"),
    ("i", "и"),
    ("\u{133}", "иј"), // ĳ ligature
    ("j", "ј"),
    ("k", "к"),
    ("l", "л"),
    ("m", "м"),
    ("n", "н"),
    ("o", "о"),
    ("œ", "ое"),
    ("p", "п"),
    ("r", "р"),
    ("š", "ш"),
    ("s\u{30C}", "ш"),
    ("s", "с"),
    ("\u{FB06}", "ст"), // ﬆ ligature
    ("t", "т"),
    ("ć", "ћ"),
    ("c\u{301}", "ћ"),
    ("u", "у"),
    ("f", "ф"),
    ("\u{FB01}", "фи"), // ﬁ ligature
    ("\u{FB02}", "фл"), // ﬂ ligature
    ("h", "х"),
    ("č", "ч"),
    ("c\u{30C}", "ч"),
    ("c", "ц"),
];

/// Cyrillic→Latin, applied as one pass over the whole text.
///
/// The Њ/Љ/Џ + vowel entries come before the bare letters so that e.g.
/// "Ње" becomes "Nje" rather than "NJе" — a title-case letter followed
/// by a lowercase vowel must expand to a title-case digraph.
pub const CYRILLIC_TO_LATIN: &[(&str, &str)] = &[
    ("Ња", "Nja"),
    ("Ње", "Nje"),
    ("Њи", "Nji"),
    ("Њо", "Njo"),
    ("Њу", "Nju"),
    ("Ља", "Lja"),
    ("Ље", "Lje"),
    ("Љи", "Lji"),
    ("Љо", "Ljo"),
    ("Љу", "Lju"),
    ("Џа", "Dža"),
    ("Џе", "Dže"),
    ("Џи", "Dži"),
    ("Џо", "Džo"),
    ("Џу", "Džu"),
    ("А", "A"),
    ("Б", "B"),
    ("В", "V"),
    ("Г", "G"),
    ("Д", "D"),
    ("Ђ", "Đ"),
    ("Е", "E"),
    ("Ж", "Ž"),
    ("З", "Z"),
    ("И", "I"),
    ("Ј", "J"),
    ("К", "K"),
    ("Л", "L"),
    ("Љ", "LJ"),
    ("М", "M"),
    ("Н", "N"),
    ("Њ", "NJ"),
    ("О", "O"),
    ("П", "P"),
    ("Р", "R"),
    ("С", "S"),
    ("Т", "T"),
    ("Ћ", "Ć"),
    ("У", "U"),
    ("Ф", "F"),
    ("Х", "H"),
    ("Ц", "C"),
    ("Ч", "Č"),
    ("Џ", "DŽ"),
    ("Ш", "Š"),
    ("а", "a"),
    ("б", "b"),
    ("в", "v"),
    ("г", "g"),
    ("д", "d"),
    ("ђ", "đ"),
    ("е", "e"),
    ("ж", "ž"),
    ("з", "z"),
    ("и", "i"),
    ("ј", "j"),
    ("к", "k"),
    ("л", "l"),
    ("љ", "lj"),
    ("м", "m"),
    ("н", "n"),
    ("њ", "nj"),
    ("о", "o"),
    ("п", "p"),
    ("р", "r"),
    ("с", "s"),
    ("т", "t"),
    ("ћ", "ć"),
    ("у", "u"),
    ("ф", "f"),
    ("х", "h"),
    ("ц", "c"),
    ("ч", "č"),
    ("џ", "dž"),
    ("ш", "š"),
];

#[cfg(test)]
mod tests {
    use super::*;

    /// A pattern listed after one of its own substrings would never
    /// match: the earlier entry rewrites part of it first. This is the
    /// operational form of "longer patterns first".
    #[test]
    fn every_pattern_is_reachable() {
        for table in [LATIN_TO_CYRILLIC, CYRILLIC_TO_LATIN] {
            for (i, (pat, _)) in table.iter().enumerate() {
                for (later, _) in &table[i + 1..] {
                    assert!(
                        !later.contains(pat),
                        "{later:?} is unreachable: listed after its substring {pat:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn no_duplicate_patterns() {
        for table in [LATIN_TO_CYRILLIC, CYRILLIC_TO_LATIN] {
            for (i, (pat, _)) in table.iter().enumerate() {
                assert!(
                    !table[i + 1..].iter().any(|(p, _)| p == pat),
                    "duplicate pattern {pat:?}"
                );
            }
        }
    }

    #[test]
    fn latin_table_size() {
        assert_eq!(LATIN_TO_CYRILLIC.len(), 103);
    }

    #[test]
    fn cyrillic_table_covers_both_cases() {
        assert_eq!(CYRILLIC_TO_LATIN.len(), 75);
        // 15 digraph+vowel entries, 30 capitals, 30 lowercase
        let multi = CYRILLIC_TO_LATIN
            .iter()
            .filter(|(p, _)| p.chars().count() > 1)
            .count();
        assert_eq!(multi, 15);
    }
}
