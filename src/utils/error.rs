//! Error handling for arabtr
//!
//! Transliteration itself never fails; these types cover the I/O boundary
//! (reading sources) and the warnings reported alongside a result.

use std::fmt;

/// Transliteration error type
#[derive(Debug, Clone)]
pub enum TranslitError {
    /// Invalid input (e.g. no text given to the CLI)
    InvalidInput { message: String },
    /// Source bytes are not valid UTF-8
    Encoding {
        message: String,
        offset: Option<usize>,
    },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for TranslitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslitError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            TranslitError::Encoding { message, offset } => {
                if let Some(o) = offset {
                    write!(f, "Encoding error at byte {}: {}", o, message)
                } else {
                    write!(f, "Encoding error: {}", message)
                }
            }
            TranslitError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for TranslitError {}

impl From<std::io::Error> for TranslitError {
    fn from(err: std::io::Error) -> Self {
        TranslitError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<std::string::FromUtf8Error> for TranslitError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        let utf8 = err.utf8_error();
        TranslitError::Encoding {
            message: utf8.to_string(),
            offset: Some(utf8.valid_up_to()),
        }
    }
}

/// Result type for fallible operations
pub type TranslitResult<T> = Result<T, TranslitError>;

/// Non-fatal issue found in the input
#[derive(Debug, Clone)]
pub struct TranslitWarning {
    pub message: String,
    /// Character offset into the input
    pub offset: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for TranslitWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(o) = self.offset {
            write!(f, "Warning at offset {}: {}", o, self.message)?;
        } else {
            write!(f, "Warning: {}", self.message)?;
        }
        if let Some(ref sug) = self.suggestion {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}

/// Transliteration output with optional warnings
#[derive(Debug, Clone)]
pub struct TranslitOutput {
    /// The transliterated text
    pub content: String,
    /// Any warnings about the input
    pub warnings: Vec<TranslitWarning>,
}

impl TranslitOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(content: String, warnings: Vec<TranslitWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl TranslitError {
    pub fn invalid(message: impl Into<String>) -> Self {
        TranslitError::InvalidInput {
            message: message.into(),
        }
    }
}
