//! View-scoped cancellation.
//!
//! Every remote call is issued under the token of the view that started it.
//! Leaving the view cancels that token; whoever applies the completion checks
//! the token first and drops the result if it is cancelled.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared, clonable cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Owner of the token for the currently shown view.
#[derive(Debug, Default)]
pub struct ViewScope {
    token: CancelToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token for calls issued from the current view.
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Cancel everything issued so far and start a fresh scope.
    pub fn renew(&mut self) {
        self.token.cancel();
        self.token = CancelToken::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renew_cancels_previous_tokens_only() {
        let mut scope = ViewScope::new();
        let old = scope.token();
        assert!(!old.is_cancelled());

        scope.renew();
        let fresh = scope.token();

        assert!(old.is_cancelled());
        assert!(!fresh.is_cancelled());
    }

    #[test]
    fn clones_share_state() {
        let token = CancelToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
    }
}
