//! WASM bindings for arabtr
//!
//! This module provides JavaScript-accessible functions for Arabic → Latin
//! transliteration and input checking.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Transliteration options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslitConvertOptions {
    /// Repair diacritic order before transliterating
    #[serde(default = "default_true")]
    pub normalize_input: bool,
    /// Run the output clean-up passes
    #[serde(default = "default_true")]
    pub post_process: bool,
    /// Collapse runs of spaces
    #[serde(default = "default_true")]
    pub collapse_whitespace: bool,
    /// Transliterate each line on its own
    #[serde(default)]
    pub per_line: bool,
}

#[cfg(feature = "wasm")]
impl Default for TranslitConvertOptions {
    fn default() -> Self {
        Self {
            normalize_input: true,
            post_process: true,
            collapse_whitespace: true,
            per_line: false,
        }
    }
}

#[cfg(feature = "wasm")]
impl From<&TranslitConvertOptions> for crate::TranslitOptions {
    fn from(opts: &TranslitConvertOptions) -> Self {
        crate::TranslitOptions {
            normalize_input: opts.normalize_input,
            post_process: opts.post_process,
            collapse_whitespace: opts.collapse_whitespace,
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

/// Transliteration result with warnings about the input
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The transliterated text
    pub output: String,
    /// Warnings found in the input
    pub warnings: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Transliterate vocalized Arabic text
///
/// # Arguments
/// * `input` - Arabic text
///
/// # Returns
/// Latin transliteration
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "transliterate")]
pub fn transliterate_wasm(input: &str) -> String {
    crate::transliterate(input)
}

/// Transliterate each line independently
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "transliterateLines")]
pub fn transliterate_lines_wasm(input: &str) -> String {
    crate::transliterate_lines(input)
}

/// Transliterate with options
///
/// Unknown or missing option fields fall back to their defaults.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "transliterateWithOptions")]
pub fn transliterate_with_options_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: TranslitConvertOptions =
        serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let translator = crate::Transliterator::with_options((&opts).into());

    let output = if opts.per_line {
        translator.translate_lines(input)
    } else {
        translator.translate(input)
    };
    let warnings = crate::diagnostics::check_text(input)
        .warnings()
        .iter()
        .map(|w| w.to_string())
        .collect();

    let result = ConvertResult { output, warnings };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// A single diagnostic as seen from JavaScript
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct JsDiagnostic {
    pub level: String,
    pub kind: String,
    pub message: String,
    pub offset: Option<usize>,
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub suggestion: Option<String>,
}

/// Check Arabic input for issues the transliterator cannot handle well
///
/// Returns an array of diagnostics.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "checkText")]
pub fn check_text_wasm(input: &str) -> JsValue {
    let result = crate::diagnostics::check_text(input);

    let diagnostics: Vec<JsDiagnostic> = result
        .diagnostics
        .iter()
        .map(|d| JsDiagnostic {
            level: d.level.to_string(),
            kind: d.kind.to_string(),
            message: d.message.clone(),
            offset: d.offset,
            line: d.line,
            column: d.column,
            suggestion: d.suggestion.clone(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&diagnostics).unwrap_or(JsValue::NULL)
}
