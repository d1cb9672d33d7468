//! End-to-end listing flows driven through the engine with a scripted source
//!
//! Run with: cargo test --test listing_flow

use std::time::Duration;

use tokio::time::Instant;
use userdir_app::message::Message;
use userdir_app::state::{AppState, UiMode};
use userdir_app::{Engine, InputKey, SEARCH_DEBOUNCE};
use userdir_core::Gender;
use userdir_source::test_utils::{test_batch, test_batch_from, ScriptedRecordSource};

type TestEngine = Engine<ScriptedRecordSource>;

fn engine_with(source: ScriptedRecordSource) -> TestEngine {
    Engine::new(AppState::new(), source)
}

fn press(engine: &mut TestEngine, c: char) {
    engine.process_message(Message::Key(InputKey::Char(c)));
}

fn type_text(engine: &mut TestEngine, text: &str) {
    for c in text.chars() {
        press(engine, c);
    }
}

#[tokio::test(start_paused = true)]
async fn test_gender_switch_then_search_without_matches() {
    let source = ScriptedRecordSource::new();
    source
        .push_ok(test_batch(15, Gender::Male), Duration::from_millis(50))
        .push_ok(
            test_batch_from(100, 8, Gender::Female),
            Duration::from_millis(50),
        );
    let mut engine = engine_with(source);

    // Initial fetch: 15 male records over two pages
    engine.start();
    assert!(engine.state.listing.is_loading());
    assert!(engine.process_next().await);

    let listing = &engine.state.listing;
    assert_eq!(listing.batch().len(), 15);
    assert!(listing.batch().iter().all(|r| r.gender == Gender::Male));
    assert_eq!(listing.total_pages(), 2);
    assert_eq!(listing.current_page().items.len(), 12);

    // Switching to female blanks the batch and re-fetches
    press(&mut engine, 'f');
    assert!(engine.state.listing.is_loading());
    assert!(engine.state.listing.batch().is_empty());
    assert!(engine.process_next().await);

    let listing = &engine.state.listing;
    assert_eq!(listing.gender(), Some(Gender::Female));
    assert_eq!(listing.batch().len(), 8);
    assert!(listing.batch().iter().all(|r| r.gender == Gender::Female));
    assert_eq!(listing.total_pages(), 1);

    let requests = engine.source().requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].gender(), None);
    assert_eq!(requests[1].gender(), Some(Gender::Female));

    // Searching for "xyz" commits once after the quiet period
    press(&mut engine, '/');
    assert_eq!(engine.state.ui_mode(), UiMode::SearchInput);
    type_text(&mut engine, "xyz");
    let typed_at = Instant::now();
    assert_eq!(engine.state.listing.query(), "");

    assert!(engine.process_next().await);
    assert!(typed_at.elapsed() >= SEARCH_DEBOUNCE);

    let listing = &engine.state.listing;
    assert_eq!(listing.query(), "xyz");
    assert!(listing.filtered().is_empty());
    assert!(listing.current_page().is_empty());
    assert_eq!(listing.total_pages(), 0);
    assert_eq!(
        listing.result_summary().as_deref(),
        Some("Found 0 results for \"xyz\"")
    );

    // Searching never fetches
    assert_eq!(engine.source().request_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_stale_response_arriving_last_is_discarded() {
    let source = ScriptedRecordSource::new();
    source
        .push_ok(test_batch(5, Gender::Male), Duration::from_millis(200))
        .push_ok(
            test_batch_from(50, 3, Gender::Female),
            Duration::from_millis(10),
        );
    let mut engine = engine_with(source);

    engine.start();
    press(&mut engine, 'f');

    // Newer female response lands first
    assert!(engine.process_next().await);
    assert!(!engine.state.listing.is_loading());
    assert_eq!(engine.state.listing.batch().len(), 3);

    // Older male response is ignored
    assert!(engine.process_next().await);
    let listing = &engine.state.listing;
    assert_eq!(listing.batch().len(), 3);
    assert!(listing.batch().iter().all(|r| r.gender == Gender::Female));
}

#[tokio::test(start_paused = true)]
async fn test_stale_response_arriving_first_is_discarded() {
    let source = ScriptedRecordSource::new();
    source
        .push_ok(test_batch(5, Gender::Male), Duration::from_millis(10))
        .push_ok(
            test_batch_from(50, 3, Gender::Female),
            Duration::from_millis(200),
        );
    let mut engine = engine_with(source);

    engine.start();
    press(&mut engine, 'f');

    // Superseded male response: still loading, batch untouched
    assert!(engine.process_next().await);
    assert!(engine.state.listing.is_loading());
    assert!(engine.state.listing.batch().is_empty());

    assert!(engine.process_next().await);
    let listing = &engine.state.listing;
    assert!(!listing.is_loading());
    assert_eq!(listing.batch().len(), 3);
    assert!(listing.batch().iter().all(|r| r.gender == Gender::Female));
}

#[tokio::test(start_paused = true)]
async fn test_failure_then_manual_retry() {
    let source = ScriptedRecordSource::new();
    source
        .push_err("HTTP 503", Duration::from_millis(10))
        .push_ok(test_batch(4, Gender::Male), Duration::from_millis(10));
    let mut engine = engine_with(source);

    engine.start();
    assert!(engine.process_next().await);
    assert!(engine
        .state
        .listing
        .error()
        .is_some_and(|e| e.contains("503")));

    press(&mut engine, 'r');
    assert!(engine.process_next().await);
    assert!(engine.state.listing.error().is_none());
    assert_eq!(engine.state.listing.batch().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_profile_round_trip_keeps_listing() {
    let source = ScriptedRecordSource::with_fallback(test_batch(15, Gender::Male));
    let mut engine = engine_with(source);

    engine.start();
    assert!(engine.process_next().await);

    engine.process_message(Message::NextPage);
    engine.process_message(Message::Key(InputKey::Enter));
    assert_eq!(engine.state.ui_mode(), UiMode::Profile);
    assert_eq!(engine.state.route.path(), "/profile/uuid-12");

    engine.process_message(Message::Key(InputKey::Esc));
    assert_eq!(engine.state.ui_mode(), UiMode::Listing);
    assert_eq!(engine.state.listing.page(), 2);
    assert_eq!(engine.source().request_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_quit_key_ends_the_session() {
    let source = ScriptedRecordSource::with_fallback(test_batch(2, Gender::Male));
    let mut engine = engine_with(source);

    engine.start();
    press(&mut engine, 'q');
    assert!(engine.should_quit());
    engine.shutdown();
}
