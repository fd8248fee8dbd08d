//! Navigation
//!
//! Path transitions are performed by the host router. The flow only asks
//! for them through [`Navigator`].

use std::sync::Mutex;

/// Host router seam
pub trait Navigator: Send + Sync {
    /// Redirect without keeping the current entry in history
    fn replace(&self, path: &str);

    /// Redirect keeping the current entry in history
    fn push(&self, path: &str);
}

/// How a navigation was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Replace,
    Push,
}

/// A navigation request observed by [`RecordingNavigator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub kind: NavigationKind,
    pub path: String,
}

/// Navigator that records requests instead of performing them.
///
/// Used by the CLI, which has no router, and by tests.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<Navigation>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All navigations so far, oldest first
    pub fn history(&self) -> Vec<Navigation> {
        self.history
            .lock()
            .map(|h| h.clone())
            .unwrap_or_default()
    }

    /// The most recent navigation, if any
    pub fn last(&self) -> Option<Navigation> {
        self.history.lock().ok().and_then(|h| h.last().cloned())
    }

    fn record(&self, kind: NavigationKind, path: &str) {
        tracing::debug!(?kind, path, "Navigation requested");
        if let Ok(mut history) = self.history.lock() {
            history.push(Navigation {
                kind,
                path: path.to_string(),
            });
        }
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, path: &str) {
        self.record(NavigationKind::Replace, path);
    }

    fn push(&self, path: &str) {
        self.record(NavigationKind::Push, path);
    }
}

impl<N: Navigator + ?Sized> Navigator for std::sync::Arc<N> {
    fn replace(&self, path: &str) {
        (**self).replace(path)
    }

    fn push(&self, path: &str) {
        (**self).push(path)
    }
}
