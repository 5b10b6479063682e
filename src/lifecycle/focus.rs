use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio_util::sync::CancellationToken;

/// Screen lifecycle notifications from the navigation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    Focused,
    Blurred,
}

/// Hands out one cancellation token per focus period.
///
/// Work started while focused carries the token; blurring cancels it and any
/// late result is dropped.
#[derive(Debug, Default)]
pub struct ScreenFocus {
    parent: CancellationToken,
    current: Mutex<Option<CancellationToken>>,
}

impl ScreenFocus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens issued become children of `parent`, e.g. an app-wide shutdown token.
    pub fn with_parent(parent: CancellationToken) -> Self {
        Self {
            parent,
            current: Mutex::new(None),
        }
    }

    /// Starts a new focus period, cancelling the previous one if still open.
    pub fn focus(&self) -> CancellationToken {
        let token = self.parent.child_token();
        if let Some(previous) = self.current().replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    pub fn blur(&self) {
        if let Some(token) = self.current().take() {
            token.cancel();
        }
    }

    pub fn is_focused(&self) -> bool {
        self.token().is_some()
    }

    /// Token of the open focus period
    pub fn token(&self) -> Option<CancellationToken> {
        self.current()
            .as_ref()
            .filter(|token| !token.is_cancelled())
            .cloned()
    }

    // A panic while holding the lock cannot leave the slot half-written.
    fn current(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies `event`; returns the new token on focus.
    pub fn handle(&self, event: FocusEvent) -> Option<CancellationToken> {
        match event {
            FocusEvent::Focused => Some(self.focus()),
            FocusEvent::Blurred => {
                self.blur();
                None
            }
        }
    }
}
