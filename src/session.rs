//! Session status
//!
//! The flow never owns authentication state. The host passes in something
//! that can report the current [`SessionStatus`] and the flow reads it on
//! every render.

use std::fmt;
use std::str::FromStr;
use tokio::sync::watch;

/// Authentication state of the current user as tracked by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStatus {
    /// Still resolving; nothing but a loading indicator is shown
    #[default]
    Loading,
    Authenticated,
    Unauthenticated,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Loading => "loading",
            SessionStatus::Authenticated => "authenticated",
            SessionStatus::Unauthenticated => "unauthenticated",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "loading" => Ok(SessionStatus::Loading),
            "authenticated" => Ok(SessionStatus::Authenticated),
            "unauthenticated" => Ok(SessionStatus::Unauthenticated),
            other => Err(format!("Unknown session status: {}", other)),
        }
    }
}

/// Read side of the host's session state
pub trait SessionProvider: Send + Sync {
    fn status(&self) -> SessionStatus;
}

/// A fixed status, for hosts that resolve the session up front
impl SessionProvider for SessionStatus {
    fn status(&self) -> SessionStatus {
        *self
    }
}

/// Reactive status published by a [`SessionStore`]
impl SessionProvider for watch::Receiver<SessionStatus> {
    fn status(&self) -> SessionStatus {
        *self.borrow()
    }
}

/// Write side owned by the host shell
#[derive(Debug)]
pub struct SessionStore {
    tx: watch::Sender<SessionStatus>,
}

impl SessionStore {
    pub fn new(initial: SessionStatus) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Publish a new status to every subscriber
    pub fn set(&self, status: SessionStatus) {
        self.tx.send_replace(status);
    }

    pub fn current(&self) -> SessionStatus {
        *self.tx.borrow()
    }

    /// A provider handle for a flow
    pub fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.tx.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SessionStatus::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        for status in [
            SessionStatus::Loading,
            SessionStatus::Authenticated,
            SessionStatus::Unauthenticated,
        ] {
            assert_eq!(status.to_string().parse::<SessionStatus>(), Ok(status));
        }
        assert_eq!("Authenticated".parse::<SessionStatus>(), Ok(SessionStatus::Authenticated));
        assert!("signed-in".parse::<SessionStatus>().is_err());
    }

    #[test]
    fn test_store_updates_subscribers() {
        let store = SessionStore::default();
        let provider = store.subscribe();
        assert_eq!(provider.status(), SessionStatus::Loading);

        store.set(SessionStatus::Authenticated);
        assert_eq!(provider.status(), SessionStatus::Authenticated);
        assert_eq!(store.current(), SessionStatus::Authenticated);
    }
}
