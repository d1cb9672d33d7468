//! Main TUI runner - entry point and event loop

use userdir_app::config::Settings;
use userdir_app::signals;
use userdir_app::state::{AppState, StartupOptions};
use userdir_app::Engine;
use userdir_core::prelude::*;
use userdir_source::RecordSource;

use super::{event, render, terminal};

/// Run the directory UI until the user quits
pub async fn run<S>(settings: Settings, options: StartupOptions, source: S) -> Result<()>
where
    S: RecordSource + Sync + 'static,
{
    let state = AppState::from_startup(settings, options);
    let mut engine = Engine::new(state, source);

    // Sends Message::Quit on SIGINT/SIGTERM until the engine shuts down
    let signal_listener =
        signals::spawn_signal_listener(engine.msg_sender(), engine.shutdown_watch());

    let mut term = terminal::init();
    engine.start();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    terminal::restore();

    if let Err(e) = signal_listener.await {
        debug!("Signal listener ended abnormally: {}", e);
    }

    info!("Exited event loop");
    result
}

/// Main event loop
fn run_loop<S>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<S>) -> Result<()>
where
    S: RecordSource + Sync + 'static,
{
    while !engine.should_quit() {
        // Fetch results, debounce commits, signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
