use thiserror::Error;

/// Everything that can go wrong signing in or registering.
///
/// The `Display` text is shown to the user as-is, both in the error toast
/// and under the form.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Rejected before any request was sent
    #[error("{0}")]
    Validation(String),

    /// Non-OK response carrying a `message`
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Non-OK response without a usable body
    #[error("Authentication failed (HTTP {status})")]
    Status { status: u16 },

    #[error("The server did not respond in time")]
    Timeout,

    #[error("Could not reach the server: {0}")]
    Network(#[source] reqwest::Error),

    /// OK response that could not be understood
    #[error("Unexpected response from server: {0}")]
    InvalidResponse(String),
}

impl AuthError {
    pub fn validation(message: impl Into<String>) -> Self {
        AuthError::Validation(message.into())
    }

    /// HTTP status attached to the failure, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            AuthError::Rejected { status, .. } | AuthError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AuthError::Timeout
        } else {
            AuthError::Network(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
