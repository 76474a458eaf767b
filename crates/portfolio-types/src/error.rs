use thiserror::Error;

/// Failures of the guestbook operations.
///
/// The three `Invalid*` variants are client input errors; their `Display`
/// text is sent back verbatim as the 400 response body.
#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("Invalid name")]
    InvalidName,

    #[error("Invalid content")]
    InvalidContent,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}

impl TimelineError {
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}
