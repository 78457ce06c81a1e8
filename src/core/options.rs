//! Transliteration options

/// Switches for the stages around the rule engine
///
/// The rule engine itself has no knobs; these only decide whether the input
/// is repaired first and whether the joined output is cleaned up afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslitOptions {
    /// Repair shadda ordering and bare lam+shadda before the engine runs
    /// Default: true
    pub normalize_input: bool,

    /// Apply the macron, prefix-fusion and hyphen passes to the output
    /// Default: true
    pub post_process: bool,

    /// Collapse runs of spaces and trim the output
    /// Default: true
    pub collapse_whitespace: bool,
}

impl Default for TranslitOptions {
    fn default() -> Self {
        Self {
            normalize_input: true,
            post_process: true,
            collapse_whitespace: true,
        }
    }
}

impl TranslitOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine output exactly as emitted, token stream joined with no cleanup
    pub fn raw() -> Self {
        Self {
            normalize_input: false,
            post_process: false,
            collapse_whitespace: false,
        }
    }
}
