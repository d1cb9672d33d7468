//! Engine: owns the state, the message channel and the background resources
//!
//! Front ends feed input as [`Message`]s and drain the channel each frame;
//! the engine is the single caller of the update function.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::debounce::Debouncer;
use crate::message::Message;
use crate::process::process_message;
use crate::state::AppState;
use userdir_core::prelude::*;
use userdir_source::RecordSource;

/// Capacity of the message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

pub struct Engine<S> {
    pub state: AppState,
    source: Arc<S>,
    msg_tx: mpsc::Sender<Message>,
    msg_rx: mpsc::Receiver<Message>,
    debouncer: Debouncer,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl<S> Engine<S>
where
    S: RecordSource + Sync + 'static,
{
    pub fn new(state: AppState, source: S) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        Self {
            state,
            source: Arc::new(source),
            msg_tx,
            msg_rx,
            debouncer: Debouncer::default(),
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// Sender for background producers (signal handler, input threads)
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Receiver that flips to `true` when [`Engine::shutdown`] runs
    pub fn shutdown_watch(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Enter the initial route
    pub fn start(&mut self) {
        self.process_message(Message::Started);
    }

    pub fn process_message(&mut self, message: Message) {
        process_message(
            &mut self.state,
            message,
            &self.msg_tx,
            &self.source,
            &mut self.debouncer,
            &self.shutdown_rx,
        );
    }

    /// Process every message already queued without waiting.
    /// Returns how many were processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next background message and process it.
    /// Returns `false` if the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Cancel timers and tell background tasks to stop
    pub fn shutdown(&mut self) {
        info!("Shutting down engine");
        self.debouncer.cancel();
        let _ = self.shutdown_tx.send(true);
    }
}
