//! Registration Flow
//!
//! Owns the form state and drives one submission at a time:
//!
//! ```text
//! Idle -> Submitting -> { Success | DuplicateEmail | TransportError | Ignored } -> Idle
//! ```
//!
//! The host calls [`RegistrationFlow::view`] on every render and
//! [`RegistrationFlow::handle_submit`] when the form is submitted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::client::RegistrationTransport;
use super::error::RegistrationError;
use super::input::RegistrationInput;
use super::validation::validate;
use crate::config::RoutesConfig;
use crate::navigation::Navigator;
use crate::session::{SessionProvider, SessionStatus};

/// HTTP status the endpoint answers with when the account was created
pub const STATUS_CREATED: u16 = 200;

/// HTTP status the endpoint answers with when the email is taken
pub const STATUS_EMAIL_TAKEN: u16 = 400;

/// Shared "request in flight" flag.
///
/// Clones observe the same flag, so a host can disable its submit control
/// while the flow awaits the endpoint.
#[derive(Debug, Clone, Default)]
pub struct SubmittingFlag(Arc<AtomicBool>);

impl SubmittingFlag {
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Raise the flag until the returned guard drops
    fn acquire(&self) -> SubmittingGuard {
        self.0.store(true, Ordering::SeqCst);
        SubmittingGuard(Arc::clone(&self.0))
    }
}

/// Lowers the submitting flag on drop, whichever way the submission ends
struct SubmittingGuard(Arc<AtomicBool>);

impl Drop for SubmittingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// What the form displays besides its inputs
#[derive(Debug, Default)]
pub struct FormState {
    submitting: SubmittingFlag,
    error_message: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_set()
    }

    /// Handle on the submitting flag that stays valid across awaits
    pub fn submitting_flag(&self) -> SubmittingFlag {
        self.submitting.clone()
    }

    /// Text for the form's error slot
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

/// Result of one submit attempt
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Account created; navigated to the login path
    Success,
    DuplicateEmail,
    /// Network or response failure; the cause was logged
    TransportError,
    /// Endpoint answered with a status this flow does not interpret
    Ignored { status: u16 },
    /// Rejected locally, nothing was sent
    Invalid(RegistrationError),
    /// The session is not unauthenticated, so there is no form to submit
    FormHidden,
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }
}

/// What the host should render
#[derive(Debug)]
pub enum FlowView<'a> {
    /// Session still resolving: loading indicator only
    Loading,
    /// Already signed in: nothing, a redirect to the dashboard was issued
    Redirecting,
    Form(&'a FormState),
}

/// The registration form's behavior, minus rendering
pub struct RegistrationFlow<T, N, S> {
    transport: T,
    navigator: N,
    session: S,
    routes: RoutesConfig,
    form: FormState,
    /// Set once the dashboard redirect has been issued for the current
    /// authenticated period
    redirected: bool,
}

impl<T, N, S> RegistrationFlow<T, N, S>
where
    T: RegistrationTransport,
    N: Navigator,
    S: SessionProvider,
{
    pub fn new(transport: T, navigator: N, session: S, routes: RoutesConfig) -> Self {
        Self {
            transport,
            navigator,
            session,
            routes,
            form: FormState::new(),
            redirected: false,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn session_status(&self) -> SessionStatus {
        self.session.status()
    }

    /// Decide what to show for the current session status.
    ///
    /// Issues at most one dashboard redirect per authenticated period, no
    /// matter how often it is called.
    pub fn view(&mut self) -> FlowView<'_> {
        match self.session.status() {
            SessionStatus::Loading => {
                self.redirected = false;
                FlowView::Loading
            }
            SessionStatus::Authenticated => {
                if !self.redirected {
                    self.redirected = true;
                    tracing::info!(
                        path = %self.routes.dashboard_path,
                        "Session already authenticated, redirecting"
                    );
                    self.navigator.replace(&self.routes.dashboard_path);
                }
                FlowView::Redirecting
            }
            SessionStatus::Unauthenticated => {
                self.redirected = false;
                FlowView::Form(&self.form)
            }
        }
    }

    /// Form submit handler: validate, then submit.
    pub async fn handle_submit(&mut self, input: &RegistrationInput) -> SubmissionOutcome {
        let status = self.session.status();
        if status != SessionStatus::Unauthenticated {
            tracing::debug!(session = %status, "Submit ignored, form not shown");
            return SubmissionOutcome::FormHidden;
        }

        if let Err(err) = validate(input) {
            tracing::debug!(error = %err, "Registration input rejected");
            self.form.error_message = Some(err.to_string());
            return SubmissionOutcome::Invalid(err);
        }

        self.submit(input).await
    }

    /// Send an already validated input and apply the endpoint's answer.
    pub async fn submit(&mut self, input: &RegistrationInput) -> SubmissionOutcome {
        let _submitting = self.form.submitting.acquire();

        match self.transport.register(input).await {
            Ok(STATUS_CREATED) => {
                tracing::info!(path = %self.routes.login_path, "Registration succeeded");
                self.form.error_message = None;
                self.navigator.push(&self.routes.login_path);
                SubmissionOutcome::Success
            }
            Ok(STATUS_EMAIL_TAKEN) => {
                tracing::info!("Registration rejected, email already registered");
                self.form.error_message = Some(RegistrationError::DuplicateEmail.to_string());
                SubmissionOutcome::DuplicateEmail
            }
            Ok(status) => {
                tracing::warn!(status, "Unexpected registration status, ignoring");
                SubmissionOutcome::Ignored { status }
            }
            Err(e) => {
                tracing::error!(error = %e, "Registration request failed");
                self.form.error_message = Some(RegistrationError::Transport(e).to_string());
                SubmissionOutcome::TransportError
            }
        }
    }
}
