//! Data Transfer Objects
//!
//! Response types for the API endpoints. The request body of
//! `POST /api/register` is [`crate::registration::RegistrationInput`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration success response
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub id: Uuid,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Number of registered accounts
    pub accounts: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
