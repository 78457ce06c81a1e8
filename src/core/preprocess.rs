//! Input repair before rule evaluation
//!
//! Vocalized text in the wild is not always ordered the way the rule engine
//! expects. A single forward pass fixes the two anomalies that would
//! otherwise derail the gemination rules:
//!
//! 1. A shadda typed after its vowel or tanwin is moved in front of it.
//!    Canonical Unicode ordering puts tanwin before shadda.
//! 2. A lam carrying a shadda but no vowel receives a default fatha.
//!
//! Nothing is ever removed, and no other pair is reordered.

use log::debug;

use crate::data::alphabet::{is_tanwin, is_vowel, FATHA, LAM, SHADDA};

/// Repair shadda ordering and missing vowels after a geminated lam
///
/// The result is never shorter than the input.
pub fn normalize(chars: &[char]) -> Vec<char> {
    let mut out: Vec<char> = Vec::with_capacity(chars.len() + 4);
    let mut iter = chars.iter().copied().peekable();

    while let Some(c) = iter.next() {
        if c == SHADDA {
            match out.last().copied() {
                Some(prev) if is_vowel(prev) || is_tanwin(prev) => {
                    let at = out.len() - 1;
                    debug!("preprocess: moving shadda before vowel at {}", at);
                    out.insert(at, SHADDA);
                    continue;
                }
                Some(LAM) => {
                    out.push(SHADDA);
                    if !matches!(iter.peek(), Some(next) if is_vowel(*next)) {
                        debug!("preprocess: adding fatha after lam+shadda at {}", out.len());
                        out.push(FATHA);
                    }
                    continue;
                }
                _ => {}
            }
        }
        out.push(c);
    }

    out
}

/// Convenience wrapper over [`normalize`] for string input
pub fn normalize_str(text: &str) -> Vec<char> {
    let chars: Vec<char> = text.chars().collect();
    normalize(&chars)
}
