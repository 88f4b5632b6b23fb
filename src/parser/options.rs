//! Extraction options and configuration.

/// Options for extracting text from PDF buffers.
///
/// The defaults reproduce the scanner's recall-over-precision behavior:
/// lenient header handling, plain-substitution operator stripping and the
/// bracket sweep enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// How drawing operators are stripped from stream bodies
    pub strip_mode: StripMode,

    /// Whether to sweep every `(...)` and `<...>` run for text
    pub bracket_sweep: bool,

    /// Whether batch extraction runs buffers in parallel
    pub parallel: bool,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Reject buffers whose header is not recognized.
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Set operator stripping mode.
    pub fn with_strip_mode(mut self, mode: StripMode) -> Self {
        self.strip_mode = mode;
        self
    }

    /// Enable or disable the bracket sweep.
    pub fn with_bracket_sweep(mut self, sweep: bool) -> Self {
        self.bracket_sweep = sweep;
        self
    }

    /// Enable or disable parallel batch extraction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel batch extraction.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Lenient,
            strip_mode: StripMode::Loose,
            bracket_sweep: true,
            parallel: true,
        }
    }
}

/// Error handling mode for the header check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Log an unrecognized header and keep scanning
    #[default]
    Lenient,
    /// Fail on an unrecognized header
    Strict,
}

/// How stream bodies are cleaned before operator extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StripMode {
    /// Remove operator text wherever it occurs, including inside words
    #[default]
    Loose,
    /// Only remove `q`, `Q`, `BT` and `ET` when they stand alone
    Bounded,
}
