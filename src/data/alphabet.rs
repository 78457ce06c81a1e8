//! Arabic alphabet constants
//!
//! Named code points for every letter and diacritic the rule engine inspects,
//! and the character classes the rules test membership against.

use phf::phf_set;

// Hamza and its seats
pub const HAMZA: char = '\u{0621}';
pub const ALIF_WITH_MADDA_ABOVE: char = '\u{0622}';
pub const ALIF_WITH_HAMZA_ABOVE: char = '\u{0623}';
pub const WAW_WITH_HAMZA_ABOVE: char = '\u{0624}';
pub const ALIF_WITH_HAMZA_BELOW: char = '\u{0625}';
pub const YA_WITH_HAMZA_ABOVE: char = '\u{0626}';

// Letters
pub const ALIF: char = '\u{0627}';
pub const BA: char = '\u{0628}';
pub const TA_MARBUTA: char = '\u{0629}';
pub const TA: char = '\u{062A}';
pub const THA: char = '\u{062B}';
pub const JIM: char = '\u{062C}';
pub const HHA: char = '\u{062D}';
pub const KHA: char = '\u{062E}';
pub const DAL: char = '\u{062F}';
pub const THAL: char = '\u{0630}';
pub const RA: char = '\u{0631}';
pub const ZAY: char = '\u{0632}';
pub const SIN: char = '\u{0633}';
pub const SHIN: char = '\u{0634}';
pub const SAD: char = '\u{0635}';
pub const DAD: char = '\u{0636}';
pub const TTA: char = '\u{0637}';
pub const DHA: char = '\u{0638}';
pub const AYN: char = '\u{0639}';
pub const GHAYN: char = '\u{063A}';
pub const TATWEEL: char = '\u{0640}';
pub const FA: char = '\u{0641}';
pub const QAF: char = '\u{0642}';
pub const KAF: char = '\u{0643}';
pub const LAM: char = '\u{0644}';
pub const MIM: char = '\u{0645}';
pub const NUN: char = '\u{0646}';
pub const HA: char = '\u{0647}';
pub const WAW: char = '\u{0648}';
pub const ALIF_MAKSURA: char = '\u{0649}';
pub const YA: char = '\u{064A}';
pub const ALIF_WASLA: char = '\u{0671}';

// Diacritics
pub const FATHATAN: char = '\u{064B}';
pub const DAMMATAN: char = '\u{064C}';
pub const KASRATAN: char = '\u{064D}';
pub const FATHA: char = '\u{064E}';
pub const DAMMA: char = '\u{064F}';
pub const KASRA: char = '\u{0650}';
pub const SHADDA: char = '\u{0651}';
pub const SUKUN: char = '\u{0652}';
pub const MADDA_ABOVE: char = '\u{0653}';
pub const SUPERSCRIPT_ALIF: char = '\u{0670}';
pub const SMALL_HIGH_ROUNDED_ZERO: char = '\u{06DF}';

/// Short vowels: the only marks that count as "a vowel follows" in lookahead
pub static VOWELS: phf::Set<char> = phf_set! {
    '\u{064E}', // fatha
    '\u{064F}', // damma
    '\u{0650}', // kasra
};

pub static TANWIN: phf::Set<char> = phf_set! {
    '\u{064B}', // fathatan
    '\u{064C}', // dammatan
    '\u{064D}', // kasratan
};

/// Every combining mark that sits on a consonant
pub static DIACRITICS: phf::Set<char> = phf_set! {
    '\u{064B}',
    '\u{064C}',
    '\u{064D}',
    '\u{064E}',
    '\u{064F}',
    '\u{0650}',
    '\u{0651}',
    '\u{0652}',
    '\u{0653}',
    '\u{0670}',
    '\u{06DF}',
};

pub static HAMZAS: phf::Set<char> = phf_set! {
    '\u{0621}',
    '\u{0623}',
    '\u{0624}',
    '\u{0625}',
    '\u{0626}',
};

/// Letters that assimilate the lam of the definite article
pub static SUN_LETTERS: phf::Set<char> = phf_set! {
    '\u{062A}', // ta
    '\u{062B}', // tha
    '\u{062F}', // dal
    '\u{0630}', // thal
    '\u{0631}', // ra
    '\u{0632}', // zay
    '\u{0633}', // sin
    '\u{0634}', // shin
    '\u{0635}', // sad
    '\u{0636}', // dad
    '\u{0637}', // tta
    '\u{0638}', // dha
    '\u{0644}', // lam
    '\u{0646}', // nun
};

/// Marks after which a new phrase begins
pub static SENTENCE_END: phf::Set<char> = phf_set! {
    '.',
    '!',
    '?',
    '\u{060C}', // arabic comma
    '\u{061F}', // arabic question mark
    '\n',
};

#[inline]
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

#[inline]
pub fn is_tanwin(c: char) -> bool {
    TANWIN.contains(&c)
}

#[inline]
pub fn is_diacritic(c: char) -> bool {
    DIACRITICS.contains(&c)
}

#[inline]
pub fn is_hamza(c: char) -> bool {
    HAMZAS.contains(&c)
}

#[inline]
pub fn is_sun_letter(c: char) -> bool {
    SUN_LETTERS.contains(&c)
}

#[inline]
pub fn is_sentence_end(c: char) -> bool {
    SENTENCE_END.contains(&c)
}

/// Arabic letters proper (consonants and long-vowel carriers), excluding marks
#[inline]
pub fn is_letter(c: char) -> bool {
    matches!(c, '\u{0621}'..='\u{063A}' | '\u{0641}'..='\u{064A}' | ALIF_WASLA)
}

/// Letters that can stand for a long vowel rather than a consonant
#[inline]
pub fn is_long_vowel_carrier(c: char) -> bool {
    matches!(c, ALIF | WAW | YA | ALIF_MAKSURA | ALIF_WASLA)
}
