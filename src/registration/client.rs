//! Registration endpoint client
//!
//! The flow talks to the endpoint through [`RegistrationTransport`] so that
//! the network can be swapped out. [`HttpRegistrationClient`] is the real one.

use async_trait::async_trait;
use reqwest::Client;

use super::error::TransportError;
use super::input::RegistrationInput;
use crate::config::ClientConfig;

/// Sends a registration and reports the HTTP status the endpoint answered
/// with. Status interpretation belongs to the flow.
#[async_trait]
pub trait RegistrationTransport: Send + Sync {
    async fn register(&self, input: &RegistrationInput) -> Result<u16, TransportError>;
}

/// HTTP client for the registration endpoint
pub struct HttpRegistrationClient {
    client: Client,
    config: ClientConfig,
}

impl HttpRegistrationClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl RegistrationTransport for HttpRegistrationClient {
    async fn register(&self, input: &RegistrationInput) -> Result<u16, TransportError> {
        let url = self.config.register_url();

        tracing::debug!(url = %url, "Sending registration");

        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(TransportError::classify)?;

        let status = response.status().as_u16();
        tracing::debug!(status, "Registration endpoint responded");

        Ok(status)
    }
}
