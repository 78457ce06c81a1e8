//! Default character → Latin renderings
//!
//! This is the table the rule engine falls back on whenever no contextual
//! rule claims a character. Letters map to their consonant value, short
//! vowels to their vowel, and marks that are realised by context (sukun,
//! shadda, the silent seats) map to the empty string.

use phf::phf_map;

/// Rendering used for characters absent from [`SYMBOLS`]
pub const FALLBACK: &str = " ";

pub static SYMBOLS: phf::Map<char, &'static str> = phf_map! {
    // Hamza and seats
    '\u{0621}' => "'",
    '\u{0622}' => "ā",
    '\u{0623}' => "'",
    '\u{0624}' => "'",
    '\u{0625}' => "'",
    '\u{0626}' => "'",
    '\u{0671}' => "",

    // Letters
    '\u{0627}' => "",
    '\u{0628}' => "b",
    '\u{0629}' => "t",
    '\u{062A}' => "t",
    '\u{062B}' => "th",
    '\u{062C}' => "j",
    '\u{062D}' => "ḥ",
    '\u{062E}' => "kh",
    '\u{062F}' => "d",
    '\u{0630}' => "dh",
    '\u{0631}' => "r",
    '\u{0632}' => "z",
    '\u{0633}' => "s",
    '\u{0634}' => "sh",
    '\u{0635}' => "ṣ",
    '\u{0636}' => "ḍ",
    '\u{0637}' => "ṭ",
    '\u{0638}' => "ẓ",
    '\u{0639}' => "ʿ",
    '\u{063A}' => "gh",
    '\u{0640}' => "",
    '\u{0641}' => "f",
    '\u{0642}' => "q",
    '\u{0643}' => "k",
    '\u{0644}' => "l",
    '\u{0645}' => "m",
    '\u{0646}' => "n",
    '\u{0647}' => "h",
    '\u{0648}' => "w",
    '\u{0649}' => "",
    '\u{064A}' => "y",

    // Tanwin: vowel plus the nunation marker
    '\u{064B}' => "aⁿ",
    '\u{064C}' => "uⁿ",
    '\u{064D}' => "iⁿ",

    // Vowels and marks
    '\u{064E}' => "a",
    '\u{064F}' => "u",
    '\u{0650}' => "i",
    '\u{0651}' => "",
    '\u{0652}' => "",
    '\u{0653}' => "",
    '\u{0670}' => "ā",
    '\u{06DF}' => "",

    // Whitespace
    ' ' => " ",
    '\n' => "\n",
};

/// Default Latin rendering of a single character
#[inline]
pub fn lookup(c: char) -> &'static str {
    SYMBOLS.get(&c).copied().unwrap_or(FALLBACK)
}

/// Whether the table has an explicit entry for `c`
#[inline]
pub fn is_mapped(c: char) -> bool {
    SYMBOLS.contains_key(&c)
}
