//! Account Directory
//!
//! In-memory set of registered accounts keyed by lowercased email.
//! Credentials are not retained; this backs the registration endpoint only.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::registration::RegistrationInput;

/// A registered account's profile
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub occupation: String,
    pub registered_at: DateTime<Utc>,
}

impl Account {
    fn from_input(input: &RegistrationInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: input.email.clone(),
            first_name: input.first_name.clone(),
            middle_name: input.middle_name.clone(),
            last_name: input.last_name.clone(),
            occupation: input.occupation.clone(),
            registered_at: Utc::now(),
        }
    }
}

/// Registered accounts
#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: RwLock<HashMap<String, Account>>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Insert a new account. Returns None when the email is already taken.
    pub async fn register(&self, input: &RegistrationInput) -> Option<Account> {
        let key = Self::key(&input.email);
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&key) {
            return None;
        }

        let account = Account::from_input(input);
        accounts.insert(key, account.clone());
        Some(account)
    }

    pub async fn get(&self, email: &str) -> Option<Account> {
        self.accounts.read().await.get(&Self::key(email)).cloned()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
