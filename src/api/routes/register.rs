//! Register Route
//!
//! - POST /api/register - Create an account
//!
//! Answers 200 when the account was created and 400 when the email is
//! already registered.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::RegisterResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::registration::{validate, RegistrationInput};

/// POST /api/register
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegistrationInput>,
) -> ApiResult<Json<RegisterResponse>> {
    // Same rules as the form, clients may skip them
    validate(&req)?;

    let account = state
        .accounts
        .register(&req)
        .await
        .ok_or(ApiError::EmailTaken)?;

    tracing::info!(account_id = %account.id, "Account registered");

    Ok(Json(RegisterResponse {
        message: "User is registered".to_string(),
        id: account.id,
    }))
}
