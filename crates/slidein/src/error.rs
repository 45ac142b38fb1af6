//! Error types for the transition library.

use slidein_core::Rect;
use thiserror::Error;

/// Errors surfaced by the transition engine and interaction controller.
///
/// All variants are local, recoverable conditions. [`SessionAlreadyActive`]
/// and [`NoActiveSession`] exist to tolerate host mis-sequencing (such as
/// overlapping gesture recognizers) and are expected to be logged and
/// ignored by callers; [`InvalidGeometry`] is a contract violation and the
/// caller must not proceed with the presentation.
///
/// [`SessionAlreadyActive`]: TransitionError::SessionAlreadyActive
/// [`NoActiveSession`]: TransitionError::NoActiveSession
/// [`InvalidGeometry`]: TransitionError::InvalidGeometry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransitionError {
    /// The presented frame has zero or negative area.
    #[error("invalid presented frame geometry: {frame:?}")]
    InvalidGeometry {
        /// The rejected frame.
        frame: Rect,
    },

    /// A transition session is already in flight; a second one cannot
    /// start until it reaches a terminal state.
    #[error("a transition session is already active")]
    SessionAlreadyActive,

    /// A progress update or commit decision was issued with no session in
    /// flight.
    #[error("no active transition session")]
    NoActiveSession,
}

/// Result type for transition operations.
pub type TransitionResult<T> = Result<T, TransitionError>;
