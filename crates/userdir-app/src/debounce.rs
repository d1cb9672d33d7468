//! Cancellable trailing-edge debounce for search input
//!
//! Each call to [`Debouncer::schedule`] aborts the pending timer task and
//! starts a new one. Only the last value scheduled within the quiet period
//! reaches the channel.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use userdir_core::prelude::*;

/// Quiet period before a search text is committed
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Owns at most one pending timer task
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending timer with one that commits `text` after the delay
    pub fn schedule(&mut self, generation: u64, text: String, tx: mpsc::Sender<Message>) {
        self.cancel();

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            trace!("Search debounce fired (generation {})", generation);
            if tx
                .send(Message::SearchCommitted { generation, text })
                .await
                .is_err()
            {
                debug!(
                    "Message channel closed before search commit (generation {})",
                    generation
                );
            }
        }));
    }

    /// Abort the pending timer, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
