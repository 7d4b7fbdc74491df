use miette::Diagnostic;
use thiserror::Error;

/// Type alias for [`std::result::Result`] containing a `squat_sim` [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Enum describing the possible errors that can occur in `squat_sim`.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Squat(#[from] squat::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parameter(#[from] squat::ParameterError),

    #[error("a sweep needs at least two steps, got {0}")]
    #[diagnostic(code(squat_sim::sweep::steps))]
    TooFewSteps(usize),
}
