//! Input diagnostics
//!
//! Transliteration never rejects input, but the scheme assumes fully
//! vocalized text. This module walks the input once and reports the places
//! where the output is likely to be off:
//!
//! - Diacritics with no letter to sit on
//! - Consonants left without a vowel or sukun
//! - Characters the symbol table does not know
//!
//! ## Example
//!
//! ```rust
//! use arabtr::diagnostics::{check_text, DiagnosticKind};
//!
//! let result = check_text("\u{064E}كتب");
//! assert!(result
//!     .diagnostics
//!     .iter()
//!     .any(|d| d.kind == DiagnosticKind::OrphanDiacritic));
//! ```

use std::fmt;

use crate::data::alphabet::{
    is_diacritic, is_letter, is_long_vowel_carrier, is_vowel, ALIF, ALIF_WITH_MADDA_ABOVE, HA,
    LAM, SHADDA,
};
use crate::data::mapping::is_mapped;
use crate::data::punctuation::is_punctuation;
use crate::utils::error::TranslitWarning;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - output might not be what the scheme intends
    Warning,
    /// Error - the input is outside what the scheme supports
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// What a diagnostic is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A vowel or other mark at text start or right after whitespace
    OrphanDiacritic,
    /// A shadda with no letter to geminate
    OrphanShadda,
    /// A consonant directly followed by another letter
    MissingVowel,
    /// Arabic letters present but no vowel marks anywhere
    Unvocalized,
    /// A character with no rendering; it comes out as a space
    UnmappedCharacter,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiagnosticKind::OrphanDiacritic => "orphan-diacritic",
            DiagnosticKind::OrphanShadda => "orphan-shadda",
            DiagnosticKind::MissingVowel => "missing-vowel",
            DiagnosticKind::Unvocalized => "unvocalized",
            DiagnosticKind::UnmappedCharacter => "unmapped-character",
        };
        f.write_str(name)
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub kind: DiagnosticKind,
    pub message: String,
    /// Character offset into the input
    pub offset: Option<usize>,
    /// Line number (1-indexed)
    pub line: Option<usize>,
    /// Column number (1-indexed, in characters)
    pub column: Option<usize>,
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            level,
            kind,
            message: message.into(),
            offset: None,
            line: None,
            column: None,
            suggestion: None,
        }
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.level, self.kind, self.message)?;

        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "\n  --> line {}:{}", line, col)?;
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

impl From<&Diagnostic> for TranslitWarning {
    fn from(diag: &Diagnostic) -> Self {
        TranslitWarning {
            message: format!("{}: {}", diag.kind, diag.message),
            offset: diag.offset,
            suggestion: diag.suggestion.clone(),
        }
    }
}

/// Check result with summary
#[derive(Debug, Default)]
pub struct DiagnosticResult {
    pub diagnostics: Vec<Diagnostic>,
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl DiagnosticResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Error => self.errors += 1,
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => self.infos += 1,
        }
        self.diagnostics.push(diag);
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics at warning level or above, as warnings
    pub fn warnings(&self) -> Vec<TranslitWarning> {
        self.diagnostics
            .iter()
            .filter(|d| d.level >= DiagnosticLevel::Warning)
            .map(TranslitWarning::from)
            .collect()
    }

    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.errors > 0 {
            parts.push(format!(
                "{} error{}",
                self.errors,
                if self.errors == 1 { "" } else { "s" }
            ));
        }
        if self.warnings > 0 {
            parts.push(format!(
                "{} warning{}",
                self.warnings,
                if self.warnings == 1 { "" } else { "s" }
            ));
        }
        if self.infos > 0 {
            parts.push(format!(
                "{} note{}",
                self.infos,
                if self.infos == 1 { "" } else { "s" }
            ));
        }
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Check input text for places the transliteration scheme cannot handle well
pub fn check_text(input: &str) -> DiagnosticResult {
    let mut result = DiagnosticResult::new();
    let chars: Vec<char> = input.chars().collect();
    let locations = compute_locations(&chars);

    let mut letters = 0usize;
    let mut vowels = 0usize;

    for (i, &c) in chars.iter().enumerate() {
        let prev = i.checked_sub(1).and_then(|p| chars.get(p)).copied();
        let next = chars.get(i + 1).copied();
        let (line, column) = locations[i];
        let at_word_start = prev.map_or(true, char::is_whitespace);

        if is_letter(c) {
            letters += 1;
        }
        if is_vowel(c) {
            vowels += 1;
        }

        if c == SHADDA && at_word_start {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Warning,
                    DiagnosticKind::OrphanShadda,
                    "shadda has no letter to double",
                )
                .with_offset(i)
                .with_location(line, column),
            );
        } else if is_diacritic(c) && at_word_start {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Warning,
                    DiagnosticKind::OrphanDiacritic,
                    format!("diacritic U+{:04X} has no letter to sit on", c as u32),
                )
                .with_offset(i)
                .with_location(line, column)
                .with_suggestion("place the mark directly after its letter"),
            );
        }

        if needs_vowel(&chars, i) && next.is_some_and(is_letter) {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Info,
                    DiagnosticKind::MissingVowel,
                    format!("letter '{}' carries no vowel or sukun", c),
                )
                .with_offset(i)
                .with_location(line, column),
            );
        }

        if !is_mapped(c) && !is_punctuation(c) && !c.is_whitespace() {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Warning,
                    DiagnosticKind::UnmappedCharacter,
                    format!("'{}' (U+{:04X}) has no Latin rendering", c, c as u32),
                )
                .with_offset(i)
                .with_location(line, column)
                .with_suggestion("it will be rendered as a space"),
            );
        }
    }

    if letters > 0 && vowels == 0 {
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Error,
                DiagnosticKind::Unvocalized,
                "text has no short vowels; only vocalized Arabic is supported",
            )
            .with_suggestion("add fatha, damma and kasra marks"),
        );
    }

    result
}

/// A consonant that should have been followed by a mark
fn needs_vowel(chars: &[char], i: usize) -> bool {
    let c = chars[i];
    if !is_letter(c) || is_long_vowel_carrier(c) || c == ALIF_WITH_MADDA_ABOVE {
        return false;
    }
    let prev = i.checked_sub(1).and_then(|p| chars.get(p)).copied();
    // Lam of the article and the lams of the divine name go unmarked
    if c == LAM {
        if prev == Some(ALIF) {
            return false;
        }
        let before = i.checked_sub(2).and_then(|p| chars.get(p)).copied();
        if prev == Some(LAM) && before == Some(ALIF) && chars.get(i + 1) == Some(&HA) {
            return false;
        }
    }
    true
}

/// 1-indexed (line, column) for every character
fn compute_locations(chars: &[char]) -> Vec<(usize, usize)> {
    let mut locations = Vec::with_capacity(chars.len());
    let (mut line, mut column) = (1, 1);
    for &c in chars {
        locations.push((line, column));
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    locations
}

/// Format check results for terminal output
pub fn format_diagnostics(result: &DiagnosticResult, use_color: bool) -> String {
    let mut output = String::new();

    for diag in &result.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",   // Red
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    if use_color {
        if result.has_errors() {
            output.push_str("\x1b[31m");
        } else if result.warnings > 0 {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", result.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<DiagnosticKind> {
        check_text(input).diagnostics.iter().map(|d| d.kind).collect()
    }

    #[test]
    fn test_clean_vocalized_text() {
        let result = check_text("بِسْمِ اللهِ الرَّحْمَنِ الرَّحِيمِ");
        assert!(result.is_empty(), "{}", format_diagnostics(&result, false));
        assert_eq!(result.summary(), "no issues found");
    }

    #[test]
    fn test_orphan_diacritic() {
        assert_eq!(
            kinds("\u{064F}بَ"),
            vec![DiagnosticKind::OrphanDiacritic]
        );
        assert_eq!(kinds("بَ \u{0650}"), vec![DiagnosticKind::OrphanDiacritic]);
    }

    #[test]
    fn test_orphan_shadda() {
        let result = check_text("\u{0651}بَ");
        assert_eq!(result.diagnostics[0].kind, DiagnosticKind::OrphanShadda);
        assert_eq!(result.diagnostics[0].offset, Some(0));
        assert!(!result.has_errors());
    }

    #[test]
    fn test_unvocalized_is_error() {
        let result = check_text("كتب");
        assert!(result.has_errors());
        assert!(result
            .diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::MissingVowel));
    }

    #[test]
    fn test_unmapped_character() {
        let result = check_text("بَ x");
        assert_eq!(result.warnings, 1);
        let diag = &result.diagnostics[0];
        assert_eq!(diag.kind, DiagnosticKind::UnmappedCharacter);
        assert_eq!((diag.line, diag.column), (Some(1), Some(4)));
        assert_eq!(result.warnings().len(), 1);
    }

    #[test]
    fn test_location_on_second_line() {
        let result = check_text("بَ\n\u{064E}");
        let diag = &result.diagnostics[0];
        assert_eq!((diag.line, diag.column), (Some(2), Some(1)));
    }

    #[test]
    fn test_summary_format() {
        let mut result = DiagnosticResult::new();
        result.add(Diagnostic::new(
            DiagnosticLevel::Error,
            DiagnosticKind::Unvocalized,
            "test",
        ));
        result.add(Diagnostic::new(
            DiagnosticLevel::Warning,
            DiagnosticKind::OrphanShadda,
            "test",
        ));

        let summary = result.summary();
        assert!(summary.contains("1 error"));
        assert!(summary.contains("1 warning"));
    }

    #[test]
    fn test_format_without_color() {
        let result = check_text("\u{0651}بَ");
        let out = format_diagnostics(&result, false);
        assert!(out.contains("warning[orphan-shadda]"));
        assert!(!out.contains("\x1b["));
    }
}
