//! Error types for the kl-app service layer.

/// Errors surfaced by the simulation session to its frontend.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Graph limit reached: at most {max} datasets can be compared")]
    DatasetLimitReached { max: usize },
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Failures of the external term-explanation collaborator.
///
/// Always recovered locally by substituting the fallback string; never
/// fatal, never blocks simulation actions.
#[derive(Debug, thiserror::Error)]
pub enum ExplainError {
    #[error("No explanation available for term: {term}")]
    UnknownTerm { term: String },

    #[error("Explanation service unavailable: {message}")]
    Unavailable { message: String },
}
