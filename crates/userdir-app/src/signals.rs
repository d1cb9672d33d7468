//! Termination signals mapped onto [`Message::Quit`]
//!
//! The listener races the OS signal against the engine's shutdown watch, so
//! it stops together with the engine instead of outliving the session.

use std::fmt;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::message::Message;
use userdir_core::prelude::*;

/// Termination request that ends the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermSignal {
    /// SIGINT, or Ctrl+C on Windows
    Interrupt,
    /// SIGTERM
    Terminate,
}

impl fmt::Display for TermSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermSignal::Interrupt => write!(f, "SIGINT"),
            TermSignal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// Spawn the signal listener.
///
/// Forwards a quit message on the first termination signal. Returns without
/// sending anything once `shutdown` flips to `true` or its sender is dropped.
pub fn spawn_signal_listener(
    tx: mpsc::Sender<Message>,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let received = tokio::select! {
            received = wait_for_termination() => received,
            _ = engine_stopped(&mut shutdown) => {
                debug!("Signal listener stopped with the engine");
                return;
            }
        };

        match received {
            Ok(signal) => {
                info!("{} received, quitting", signal);
                forward_quit(&tx, signal).await;
            }
            Err(e) => error!("Signal listener unavailable: {}", e),
        }
    })
}

/// Resolves once shutdown is flagged or the engine is gone
async fn engine_stopped(shutdown: &mut watch::Receiver<bool>) {
    let _ = shutdown.wait_for(|stopped| *stopped).await;
}

async fn forward_quit(tx: &mpsc::Sender<Message>, signal: TermSignal) {
    if tx.send(Message::Quit).await.is_err() {
        debug!("Message channel closed before {} was forwarded", signal);
    }
}

#[cfg(unix)]
async fn wait_for_termination() -> Result<TermSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| Error::terminal(format!("cannot watch SIGINT: {}", e)))?;
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("cannot watch SIGTERM: {}", e)))?;

    Ok(tokio::select! {
        _ = sigint.recv() => TermSignal::Interrupt,
        _ = sigterm.recv() => TermSignal::Terminate,
    })
}

#[cfg(windows)]
async fn wait_for_termination() -> Result<TermSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot watch Ctrl+C: {}", e)))?;
    Ok(TermSignal::Interrupt)
}
