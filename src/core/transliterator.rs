//! Transliteration pipeline
//!
//! ```text
//! input -> preprocess -> ArabicText -> RuleEngine -> join -> postprocess -> output
//! ```

use log::debug;

use super::engine::RuleEngine;
use super::options::TranslitOptions;
use super::postprocess::{apply_passes, collapse_whitespace};
use super::preprocess::normalize;
use super::text::ArabicText;

/// Reusable transliteration handle
///
/// Holds only its options; every call builds its own sequence and output
/// buffer, so one instance can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Transliterator {
    options: TranslitOptions,
}

impl Transliterator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TranslitOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TranslitOptions {
        &self.options
    }

    /// Transliterate one piece of text
    pub fn translate(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let chars: Vec<char> = text.chars().collect();
        let chars = if self.options.normalize_input {
            normalize(&chars)
        } else {
            chars
        };

        let sequence = ArabicText::new(chars);
        let output = RuleEngine::new(&sequence).run();
        debug!(
            "engine: {} chars -> {} tokens",
            sequence.len(),
            output.len()
        );

        let mut result = output.join();
        if self.options.post_process {
            result = apply_passes(&result);
        }
        if self.options.collapse_whitespace {
            result = collapse_whitespace(&result);
        }
        result
    }

    /// Transliterate each `\n`-separated line on its own
    pub fn translate_lines(&self, text: &str) -> String {
        text.split('\n')
            .map(|line| self.translate(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
