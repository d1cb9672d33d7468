//! Message processing
//!
//! Runs a message through the TEA update function, follows any chained
//! messages, and dispatches resulting actions.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::actions::handle_action;
use crate::debounce::Debouncer;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use userdir_source::RecordSource;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    source: &Arc<S>,
    debouncer: &mut Debouncer,
    shutdown_rx: &watch::Receiver<bool>,
) where
    S: RecordSource + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(
                action,
                msg_tx.clone(),
                source,
                debouncer,
                shutdown_rx.clone(),
            );
        }

        // Continue with follow-up message
        msg = result.message;
    }

    if state.should_quit() {
        debouncer.cancel();
    }
}
