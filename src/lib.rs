//! # arabtr
//!
//! Rule-based transliteration of vocalized Arabic into Latin script.
//!
//! ## Features
//!
//! - **Context-aware rules**: definite article, sun-letter assimilation,
//!   the divine name, hamzat wasl, long vowels and gemination
//! - **Scholarly output**: ḥ ṣ ḍ ṭ ẓ, ʿ for ayn, macrons for long vowels,
//!   superscript ⁿ for tanwin
//! - **Total**: every input string produces an output, unknown characters
//!   become a space
//! - **Diagnostics**: flags input the scheme cannot handle well
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! Only fully vocalized text (with fatha, damma, kasra, sukun and shadda)
//! transliterates meaningfully.
//!
//! ## Usage Examples
//!
//! ### Basic Transliteration
//!
//! ```rust
//! use arabtr::transliterate;
//!
//! assert_eq!(transliterate("السَّلَّامُ عَلَيْكُمْ"), "as-sallāmu ʿalaykum");
//! assert_eq!(transliterate("بِسْمِ اللهِ"), "bismi l-lāhi");
//! ```
//!
//! ### Options
//!
//! ```rust
//! use arabtr::{transliterate_with_options, TranslitOptions};
//!
//! // Raw engine output, before the post-normalizer repairs it
//! let raw = transliterate_with_options("قَالَ", &TranslitOptions::raw());
//! assert_eq!(raw, "qāl-a");
//! ```
//!
//! ### Diagnostics
//!
//! ```rust
//! use arabtr::transliterate_with_diagnostics;
//!
//! let result = transliterate_with_diagnostics("بَ x");
//! assert_eq!(result.content, "ba");
//! assert!(result.has_warnings());
//! ```

/// Core transliteration modules
pub mod core;

/// Data layer - static tables and character classes
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core types
pub use crate::core::{
    normalize, post_process, ArabicText, Output, Position, Rule, RuleEngine, Token,
    TranslitOptions, Transliterator,
};

// Re-export data modules
pub use data::alphabet;
pub use data::mapping;
pub use data::punctuation;

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{TranslitError, TranslitOutput, TranslitResult, TranslitWarning};
pub use utils::files;

/// Transliterate vocalized Arabic text with default options
///
/// # Arguments
/// * `input` - Arabic text; may contain punctuation, digits and Latin
///
/// # Returns
/// Latin transliteration
pub fn transliterate(input: &str) -> String {
    Transliterator::new().translate(input)
}

/// Transliterate vocalized Arabic text with custom options
pub fn transliterate_with_options(input: &str, options: &TranslitOptions) -> String {
    Transliterator::with_options(options.clone()).translate(input)
}

/// Transliterate each line on its own and rejoin them with `\n`
///
/// Phrase-initial rules (article, divine name) then apply at the start of
/// every line.
pub fn transliterate_lines(input: &str) -> String {
    Transliterator::new().translate_lines(input)
}

/// Transliterate and report what in the input may have gone wrong
pub fn transliterate_with_diagnostics(input: &str) -> TranslitOutput {
    let content = transliterate(input);
    let result = diagnostics::check_text(input);
    TranslitOutput::with_warnings(content, result.warnings())
}
