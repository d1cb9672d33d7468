//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::debounce::Debouncer;
use crate::message::{Message, RequestId};
use crate::UpdateAction;
use userdir_core::prelude::*;
use userdir_source::{FetchRequest, RecordSource};

/// Execute an action by spawning a background task
pub fn handle_action<S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    source: &Arc<S>,
    debouncer: &mut Debouncer,
    shutdown_rx: watch::Receiver<bool>,
) where
    S: RecordSource + Sync + 'static,
{
    match action {
        UpdateAction::FetchUsers {
            request_id,
            request,
        } => {
            spawn_fetch(request_id, request, Arc::clone(source), msg_tx, shutdown_rx);
        }

        UpdateAction::ScheduleSearchCommit { generation, text } => {
            debouncer.schedule(generation, text, msg_tx);
        }
    }
}

/// Run one fetch and report the outcome tagged with its request id.
///
/// The task exits silently if shutdown is signalled first.
fn spawn_fetch<S>(
    request_id: RequestId,
    request: FetchRequest,
    source: Arc<S>,
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) where
    S: RecordSource + Sync + 'static,
{
    tokio::spawn(async move {
        let outcome = tokio::select! {
            result = source.fetch(&request) => result,
            _ = shutdown_rx.changed() => {
                debug!("Fetch {} abandoned on shutdown", request_id);
                return;
            }
        };

        let msg = match outcome {
            Ok(records) => Message::UsersLoaded {
                request_id,
                records,
            },
            Err(e) => {
                warn!("Fetch {} failed: {}", request_id, e);
                Message::UsersLoadFailed {
                    request_id,
                    error: e.to_string(),
                }
            }
        };

        if msg_tx.send(msg).await.is_err() {
            debug!("Message channel closed before fetch {} reported", request_id);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use userdir_core::Gender;
    use userdir_source::test_utils::{test_batch, ScriptedRecordSource};

    fn fetch_action(id: u64, gender: Option<Gender>) -> UpdateAction {
        UpdateAction::FetchUsers {
            request_id: RequestId(id),
            request: FetchRequest::default().with_gender(gender),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_reports_loaded_records() {
        let source = Arc::new(ScriptedRecordSource::new());
        source.push_ok(test_batch(3, Gender::Male), Duration::from_millis(50));
        let (tx, mut rx) = mpsc::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        let mut debouncer = Debouncer::default();

        handle_action(fetch_action(1, None), tx, &source, &mut debouncer, shutdown_rx);

        match rx.recv().await {
            Some(Message::UsersLoaded {
                request_id,
                records,
            }) => {
                assert_eq!(request_id, RequestId(1));
                assert_eq!(records.len(), 3);
            }
            other => panic!("expected UsersLoaded, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_reports_failure_with_message() {
        let source = Arc::new(ScriptedRecordSource::new());
        source.push_err("HTTP 500 Internal Server Error", Duration::ZERO);
        let (tx, mut rx) = mpsc::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        let mut debouncer = Debouncer::default();

        handle_action(fetch_action(7, None), tx, &source, &mut debouncer, shutdown_rx);

        match rx.recv().await {
            Some(Message::UsersLoadFailed { request_id, error }) => {
                assert_eq!(request_id, RequestId(7));
                assert_eq!(error, "Failed to fetch users: HTTP 500 Internal Server Error");
            }
            other => panic!("expected UsersLoadFailed, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_order_completions_keep_their_ids() {
        let source = Arc::new(ScriptedRecordSource::new());
        source
            .push_ok(test_batch(20, Gender::Male), Duration::from_millis(800))
            .push_ok(test_batch(5, Gender::Female), Duration::from_millis(100));
        let (tx, mut rx) = mpsc::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        let mut debouncer = Debouncer::default();

        handle_action(
            fetch_action(1, None),
            tx.clone(),
            &source,
            &mut debouncer,
            shutdown_rx.clone(),
        );
        // Let the first task register its request before the second one
        tokio::task::yield_now().await;
        handle_action(
            fetch_action(2, Some(Gender::Female)),
            tx,
            &source,
            &mut debouncer,
            shutdown_rx,
        );

        let first = rx.recv().await;
        let second = rx.recv().await;
        assert!(matches!(
            first,
            Some(Message::UsersLoaded { request_id: RequestId(2), .. })
        ));
        assert!(matches!(
            second,
            Some(Message::UsersLoaded { request_id: RequestId(1), .. })
        ));
        assert_eq!(source.requests()[1].gender(), Some(Gender::Female));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_abandons_fetch() {
        let source = Arc::new(ScriptedRecordSource::new());
        source.push_ok(test_batch(1, Gender::Male), Duration::from_secs(5));
        let (tx, mut rx) = mpsc::channel(8);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let mut debouncer = Debouncer::default();

        handle_action(fetch_action(1, None), tx, &source, &mut debouncer, shutdown_rx);
        tokio::task::yield_now().await;
        shutdown_tx.send(true).unwrap();

        // The task drops its sender without reporting
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_schedule_search_commit_goes_through_debouncer() {
        let source = Arc::new(ScriptedRecordSource::new());
        let (tx, mut rx) = mpsc::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        let mut debouncer = Debouncer::default();

        handle_action(
            UpdateAction::ScheduleSearchCommit {
                generation: 4,
                text: "ann".to_string(),
            },
            tx,
            &source,
            &mut debouncer,
            shutdown_rx,
        );

        let start = tokio::time::Instant::now();
        assert!(matches!(
            rx.recv().await,
            Some(Message::SearchCommitted { generation: 4, ref text }) if text == "ann"
        ));
        assert!(start.elapsed() >= crate::debounce::SEARCH_DEBOUNCE);
        assert_eq!(source.request_count(), 0);
    }
}
