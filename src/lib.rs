//! # Signup
//!
//! Account registration flow with session-gated navigation, plus a
//! sparkline demo.
//!
//! ## Modules
//!
//! - [`registration`]: Validation, the endpoint client and the form flow
//! - [`session`]: Session status as reported by the host
//! - [`navigation`]: Router seam (`replace` / `push`)
//! - [`charts`]: Sparkline series and renderers
//! - [`api`]: Development registration endpoint with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use signup::config::{ClientConfig, RoutesConfig};
//! use signup::navigation::RecordingNavigator;
//! use signup::registration::{HttpRegistrationClient, RegistrationFlow, RegistrationInput};
//! use signup::session::SessionStatus;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpRegistrationClient::new(ClientConfig::default())?;
//!     let mut flow = RegistrationFlow::new(
//!         client,
//!         RecordingNavigator::new(),
//!         SessionStatus::Unauthenticated,
//!         RoutesConfig::default(),
//!     );
//!
//!     let input = RegistrationInput::new("ada@example.com", "analytical")
//!         .name("Ada", "", "Lovelace");
//!     let outcome = flow.handle_submit(&input).await;
//!
//!     println!("{:?} {:?}", outcome, flow.form().error_message());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod logging;
pub mod navigation;
pub mod registration;
pub mod session;

pub use registration::{
    validate, FlowView, FormState, HttpRegistrationClient, RegistrationError, RegistrationFlow,
    RegistrationInput, RegistrationTransport, SubmissionOutcome, TransportError,
};

pub use session::{SessionProvider, SessionStatus, SessionStore};

pub use navigation::{Navigation, NavigationKind, Navigator, RecordingNavigator};

pub use charts::{demo_series, Sparkline, SparklineRenderer, SvgRenderer, TextRenderer};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{
    ApiConfig, ClientConfig, Config, ConfigError, ConfigSource, LoggingConfig, RoutesConfig,
};
