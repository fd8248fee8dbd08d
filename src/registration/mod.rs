//! Registration
//!
//! Client side of account sign-up: validate the form fields, post them to
//! the registration endpoint and react to its answer.
//!
//! ## Architecture
//!
//! - **Validation**: email shape and password length, checked locally
//! - **Client**: transport seam plus the reqwest implementation
//! - **Flow**: form state, submit handling and the session-gated view

mod client;
mod error;
mod flow;
mod input;
mod validation;

pub use client::{HttpRegistrationClient, RegistrationTransport};
pub use error::{RegistrationError, RegistrationResult, TransportError};
pub use flow::{
    FlowView, FormState, RegistrationFlow, SubmissionOutcome, SubmittingFlag, STATUS_CREATED,
    STATUS_EMAIL_TAKEN,
};
pub use input::RegistrationInput;
pub use validation::{is_valid_email, is_valid_password, validate, MIN_PASSWORD_LEN};
