//! Registration API
//!
//! A small registration endpoint built with Axum, for running the flow
//! end to end during development.
//!
//! # Endpoints
//!
//! ## Registration
//! - `POST /api/register` - Create an account (200 created, 400 email taken)
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use signup::api::{serve, AppState};
//! use signup::config::ApiConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::new("127.0.0.1", 3000);
//!     serve(AppState::new(config.clone()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod accounts;
pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use accounts::{Account, AccountDirectory};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().route("/register", post(routes::register::register));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Permissive when no origins are configured
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Registration API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Registration API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientConfig, RoutesConfig};
    use crate::navigation::{NavigationKind, RecordingNavigator};
    use crate::registration::{
        HttpRegistrationClient, RegistrationFlow, RegistrationInput, SubmissionOutcome,
    };
    use crate::session::SessionStatus;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, Arc<AccountDirectory>) {
        let accounts = Arc::new(AccountDirectory::new());
        let state = AppState::with_accounts(Arc::clone(&accounts), ApiConfig::default());
        (build_router(state), accounts)
    }

    fn register_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/register")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    const ADA: &str = r#"{"email":"ada@example.com","password":"analytical","firstName":"Ada","middleName":"","lastName":"Lovelace","occupation":"Mathematician"}"#;

    #[tokio::test]
    async fn test_health_live() {
        let (app, _) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_register_created() {
        let (app, accounts) = create_test_app();

        let response = app.oneshot(register_request(ADA)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let stored = accounts.get("ada@example.com").await.unwrap();
        assert_eq!(stored.last_name, "Lovelace");
        assert_eq!(stored.occupation, "Mathematician");
    }

    #[tokio::test]
    async fn test_register_duplicate() {
        let (app, _) = create_test_app();

        let first = app.clone().oneshot(register_request(ADA)).await.unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app.oneshot(register_request(ADA)).await.unwrap();
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(second.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "EMAIL_TAKEN");
        assert_eq!(json["error"]["message"], "This email is already registered");
    }

    #[tokio::test]
    async fn test_register_invalid_input() {
        let (app, accounts) = create_test_app();

        let response = app
            .oneshot(register_request(
                r#"{"email":"ada@example.com","password":"short"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(accounts.is_empty().await);
    }

    #[tokio::test]
    async fn test_register_invalid_json() {
        let (app, _) = create_test_app();

        let response = app.oneshot(register_request("not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_flow_against_live_server() {
        let (app, accounts) = create_test_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let client =
            HttpRegistrationClient::new(ClientConfig::with_base_url(format!("http://{}", addr)))
                .unwrap();
        let mut flow = RegistrationFlow::new(
            client,
            RecordingNavigator::new(),
            SessionStatus::Unauthenticated,
            RoutesConfig::default(),
        );
        let input = RegistrationInput::new("grace@example.com", "compiler1")
            .name("Grace", "Brewster", "Hopper")
            .occupation("Rear Admiral");

        let outcome = flow.handle_submit(&input).await;
        assert!(outcome.is_success());
        assert_eq!(flow.navigator().last().map(|n| n.kind), Some(NavigationKind::Push));
        assert!(accounts.get("grace@example.com").await.is_some());

        let again = flow.handle_submit(&input).await;
        assert!(matches!(again, SubmissionOutcome::DuplicateEmail));
        assert_eq!(
            flow.form().error_message(),
            Some("This email is already registered")
        );
        assert_eq!(flow.navigator().history().len(), 1);
        assert!(!flow.form().is_submitting());

        server.abort();
    }
}
