//! Data layer - Static mappings and constants
//!
//! This module contains all static data used for transliteration:
//! - Alphabet constants and character classes
//! - Default character → Latin mapping
//! - Punctuation pass-through table

pub mod alphabet;
pub mod mapping;
pub mod punctuation;

// Re-export commonly used items
pub use alphabet::{DIACRITICS, HAMZAS, SENTENCE_END, SUN_LETTERS, TANWIN, VOWELS};
pub use mapping::{lookup, SYMBOLS};
pub use punctuation::{OVERRIDES, PUNCTUATION};
