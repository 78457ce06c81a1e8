//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Input diagnostics
//! - Source reading
//! - Error types and result types

pub mod diagnostics;
pub mod error;
pub mod files;

// Re-export commonly used items
pub use diagnostics::{
    check_text, format_diagnostics, Diagnostic, DiagnosticKind, DiagnosticLevel,
    DiagnosticResult,
};
pub use error::{TranslitError, TranslitOutput, TranslitResult, TranslitWarning};
pub use files::decode_source;

#[cfg(not(target_arch = "wasm32"))]
pub use files::{read_source, read_stdin};
