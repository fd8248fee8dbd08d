//! Registration error types
//!
//! Every error reaches the form as a single line of text: its `Display`.

use thiserror::Error;

/// Why a submission did not produce an account
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Email does not have the `local@domain.tld` shape
    #[error("Email is invalid")]
    InvalidEmail,

    /// Password missing or shorter than the minimum length
    #[error("Password is invalid")]
    InvalidPassword,

    /// The endpoint already has an account for this email
    #[error("This email is already registered")]
    DuplicateEmail,

    /// Network or response failure. The cause is kept for logs only.
    #[error("Error, try again")]
    Transport(#[source] TransportError),
}

impl RegistrationError {
    /// Local validation failure (no request was sent)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RegistrationError::InvalidEmail | RegistrationError::InvalidPassword
        )
    }
}

impl From<TransportError> for RegistrationError {
    fn from(err: TransportError) -> Self {
        RegistrationError::Transport(err)
    }
}

/// Failures talking to the registration endpoint
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Registration endpoint unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl TransportError {
    /// Classify a reqwest error the way the rest of the crate reports it
    pub fn classify(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Unavailable
        } else {
            TransportError::Request(err)
        }
    }
}

/// Result type for registration operations
pub type RegistrationResult<T> = Result<T, RegistrationError>;
