//! Cooperative cancellation for in-flight loads
//!
//! A view that navigates away mid-load cancels its token; the racing read
//! resolves to `ContentError::Cancelled` instead of being silently
//! abandoned.

use std::sync::Arc;
use tokio::sync::watch;

/// Clonable cancellation token.
///
/// Reads race against `cancelled()` with `tokio::select!`. A token that is
/// never cancelled pends forever, so the select always resolves through the
/// read arm in the normal case.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            tx: Arc::new(tx),
            rx,
        }
    }

    /// Cancel every load holding a clone of this token
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the token is cancelled; pends forever otherwise
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        // The sender lives in self, so wait_for can only fail if every
        // token clone is dropped, at which point nobody is awaiting.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cancel_is_observed_by_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());

        token.cancel();
        assert!(clone.is_cancelled());
        // Must resolve immediately now that the token is cancelled
        clone.cancelled().await;
    }

    #[tokio::test]
    async fn test_fresh_token_pends() {
        let token = CancelToken::new();
        let pending = tokio::time::timeout(
            std::time::Duration::from_millis(10),
            token.cancelled(),
        )
        .await;
        assert!(pending.is_err());
    }
}
