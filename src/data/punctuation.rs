//! Punctuation pass-through table
//!
//! Punctuation, digits and the Islamic ligature symbols are emitted as-is,
//! except for the few Arabic marks that have a distinct Latin counterpart.

use phf::{phf_map, phf_set};

pub static PUNCTUATION: phf::Set<char> = phf_set! {
    '،', '؟', '!', '.', ':', ';', '(', ')', '[', ']', '{', '}', '"', '\'', '؛',
    ',', '?', '-', '_', '/', '\\', '«', '»', '*', '&', '%', '$', '#', '@',
    '+', '=', '<', '>', '|', '~', '^',
    // Arabic-Indic digits
    '٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    // Ligatures and Quranic brackets
    'ﷺ', 'ﷻ', 'ﷲ', '﷽', '﴿', '﴾',
};

/// Arabic punctuation rewritten to its Latin form
pub static OVERRIDES: phf::Map<char, &'static str> = phf_map! {
    '،' => ",",
    '؛' => ";",
    '؟' => "?",
    // Quranic brackets are mirrored for left-to-right reading
    '﴿' => "«",
    '﴾' => "»",
};

#[inline]
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Latin rendering of a punctuation character, or `None` if `c` is not punctuation
pub fn render(c: char) -> Option<String> {
    if !is_punctuation(c) {
        return None;
    }
    Some(match OVERRIDES.get(&c) {
        Some(latin) => (*latin).to_string(),
        None => c.to_string(),
    })
}
