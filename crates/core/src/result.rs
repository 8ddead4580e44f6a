// crates/core/src/result.rs
use serde::Serialize;
use thiserror::Error;

/// A count number of some metric within source text.
///
/// Shall be treated as a non-negative integer number. In the unlikely event
/// of an overflow, count values wrap around according to standard unsigned
/// integer arithmetic.
pub type Count = u64;

/// Enumeration of error kinds reported by count operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
pub enum ErrorKind {
    /// The input format or programming language is not supported.
    #[error("the input format or programming language is not supported")]
    UnsupportedFormat,

    /// The input provided was invalid.
    #[error("the input provided was invalid")]
    InvalidInput,

    /// The input size exceeds internal limits.
    #[error("the input is too large to be processed")]
    InputTooLarge,

    /// An attempt was made to parse source text that is syntactically
    /// incorrect in the underlying programming language.
    #[error("a syntax error was detected")]
    SyntaxError,

    /// A memory allocation failure has occurred, usually an OOM condition.
    #[error("a memory allocation failure has occurred")]
    AllocFailure,

    /// Catch-all for errors that are not further specified.
    #[error("an unknown error has occurred")]
    Unknown,
}

impl ErrorKind {
    /// Critical errors always propagate to the aggregate state and abort
    /// compound operations.
    #[must_use]
    pub fn is_critical(self) -> bool {
        matches!(self, Self::AllocFailure | Self::Unknown)
    }

    /// Numeric error code, stable across releases, used in diagnostics.
    #[must_use]
    pub fn code(self) -> u32 {
        match self {
            Self::UnsupportedFormat => 1,
            Self::InvalidInput => 2,
            Self::InputTooLarge => 3,
            Self::SyntaxError => 4,
            Self::AllocFailure => 5,
            Self::Unknown => 6,
        }
    }
}

/// The result status of an operation, indicating success or failure.
///
/// For a single operation, an `ok` value of `true` implies that `error` is
/// `None`. For compound operations, `ok = true` means that no critical
/// failure has occurred; `error` may still record the most recently
/// encountered non-critical error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResultState {
    /// Whether the operation has completed without critical errors.
    ///
    /// Is initialized as `false` and only set to `true` if the last performed
    /// operation was fully or partially successful.
    pub ok: bool,

    /// The kind of error that has occurred, if any.
    pub error: Option<ErrorKind>,

    /// An optional message describing the encountered error.
    ///
    /// Messages are not strictly guaranteed to be presentable to end users,
    /// as they may contain technical details.
    pub message: Option<&'static str>,
}

impl ResultState {
    #[must_use]
    pub fn success() -> Self {
        Self { ok: true, error: None, message: None }
    }

    #[must_use]
    pub fn failure(error: ErrorKind, message: &'static str) -> Self {
        Self { ok: false, error: Some(error), message: Some(message) }
    }

    /// Records a failure in place, marking the state as not ok.
    pub fn record(&mut self, error: ErrorKind, message: &'static str) {
        self.ok = false;
        self.error = Some(error);
        self.message = Some(message);
    }
}

/// The result of a single count operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CountResult {
    /// The counted result number.
    pub count: Count,

    /// The result state of the operation.
    pub state: ResultState,
}

impl CountResult {
    #[must_use]
    pub fn success(count: Count) -> Self {
        Self { count, state: ResultState::success() }
    }

    #[must_use]
    pub fn failure(error: ErrorKind, message: &'static str) -> Self {
        Self { count: 0, state: ResultState::failure(error, message) }
    }
}

/// The results of possibly multiple count operations performed on a single
/// source entity, like one source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CountResultGroup {
    pub logical_lines: Count,
    pub physical_lines: Count,
    pub words: Count,
    pub characters: Count,

    /// The size of the source entity in bytes.
    pub source_size: Count,

    /// The state of the performed operations.
    pub state: ResultState,

    /// Whether the source entity was actually processed.
    ///
    /// If this is `false`, then no counts are available and all count values
    /// are zero. A processed entity might still have zero counts, e.g. an
    /// empty file.
    pub processed: bool,
}

impl CountResultGroup {
    /// Resets the group to its pristine state before a counting pass.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn zero_counts(&mut self) {
        self.logical_lines = 0;
        self.physical_lines = 0;
        self.words = 0;
        self.characters = 0;
        self.source_size = 0;
    }
}
