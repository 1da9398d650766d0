use thiserror::Error;

/// Error taxonomy for the request bridge. Every variant is recovered at the
/// handler boundary and rendered as a JSON error body; none are fatal to the
/// running process.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required input field was missing or empty. Reported immediately,
    /// before any outbound call is attempted.
    #[error("{0}")]
    Validation(String),

    /// The outbound model call failed (network, auth, provider-side error,
    /// malformed response). Carries the underlying error's description and
    /// is never retried.
    #[error("{0}")]
    Call(String),

    /// Writing the analysis record to disk failed. The in-memory analysis
    /// result is not lost, only the save action.
    #[error("保存失敗: {0}")]
    Persistence(String),
}
