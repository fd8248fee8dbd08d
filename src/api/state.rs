//! Application State
//!
//! Shared state accessible by all API handlers.

use std::sync::Arc;
use std::time::Instant;

use super::accounts::AccountDirectory;
use crate::config::ApiConfig;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Registered accounts
    pub accounts: Arc<AccountDirectory>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_accounts(Arc::new(AccountDirectory::new()), config)
    }

    /// State over an existing directory
    pub fn with_accounts(accounts: Arc<AccountDirectory>, config: ApiConfig) -> Self {
        Self {
            accounts,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
