//! Error types for log parsing.
//!
//! [`ExtractionError`] is what a fact extractor reports about a single line.
//! [`QuakeLogError`] is what a whole run reports to its caller, with the line
//! number attached.

use crate::line_parsing::line_kind::LineKind;
use crate::line_parsing::means_of_death::UnknownMeansOfDeath;

/// Failure to pull structured facts out of a line that was already classified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    /// The line is not `<killer> killed <victim> by MOD_*`.
    #[error("kill line does not match `<killer> killed <victim> by <MOD_*>`")]
    KillShape,

    /// The cause has the `MOD_*` shape but is not a known means of death.
    #[error(transparent)]
    UnknownMeans(#[from] UnknownMeansOfDeath),

    /// The userinfo payload carries no `n\<name>` field.
    #[error("userinfo line has no `n\\<name>` field")]
    MissingPlayerName,
}

/// A kill or userinfo line was seen before any `InitGame`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no match is open")]
pub struct NoOpenSession;

/// Errors that stop (or, under `ErrorPolicy::Collect`, are recorded by) a parsing run.
#[derive(Debug, thiserror::Error)]
pub enum QuakeLogError {
    /// The line source could not be opened or read.
    #[error("cannot read {source_name}: {source}")]
    InputUnavailable {
        /// Path or label of the line source
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// A recognized event line did not match that event's grammar.
    #[error("line {line_number}: malformed {kind} line: {source}")]
    MalformedEventLine {
        /// 1-based line number in the source
        line_number: usize,
        kind: LineKind,
        #[source]
        source: ExtractionError,
        /// The offending line, verbatim
        line: String,
    },

    /// A kill or userinfo line appeared before the first `InitGame`.
    #[error("line {line_number}: {kind} line before any InitGame")]
    NoOpenSession { line_number: usize, kind: LineKind },

    /// The worker pool for multi-file runs could not be built.
    #[error("cannot build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl QuakeLogError {
    /// Whether this error concerns a single line and may be skipped under `ErrorPolicy::Collect`.
    pub fn is_line_error(&self) -> bool {
        matches!(
            self,
            QuakeLogError::MalformedEventLine { .. } | QuakeLogError::NoOpenSession { .. }
        )
    }
}
