//! Core transliteration modules
//!
//! This module contains the transliteration pipeline:
//! - `preprocess`: input repair (shadda ordering, bare lam+shadda)
//! - `text`: positioned character sequence and cursor
//! - `engine`: the rule engine
//! - `postprocess`: ordered pattern passes over the joined output

pub mod engine;
pub mod options;
pub mod postprocess;
pub mod preprocess;
pub mod text;
pub mod transliterator;

// Re-export main types and functions
pub use engine::{Output, Rule, RuleEngine, Token};
pub use options::TranslitOptions;
pub use postprocess::post_process;
pub use preprocess::normalize;
pub use text::{ArabicText, Position};
pub use transliterator::Transliterator;
