//! Main TUI runner - entry point and event loop

use std::time::Instant;

use hanzi_app::config::Settings;
use hanzi_app::{Engine, Message};
use hanzi_core::prelude::*;

use crate::event::{self, MouseMapper, TickTimer, TICK_INTERVAL};
use crate::widgets::BoardCache;
use crate::{render, terminal};

/// Run the practice board until the user quits
pub async fn run(settings: Settings, api_key: Option<String>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut engine = Engine::new(settings, api_key)?;

    // Initialize terminal
    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_input_capture() {
        warn!("Mouse capture unavailable: {}", e);
    }

    engine.startup();
    let result = run_loop(&mut term, &mut engine);

    if let Err(e) = terminal::disable_input_capture() {
        debug!("Failed to disable mouse capture: {}", e);
    }
    ratatui::restore();

    info!("Hanzi Board exiting");
    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    let mut cache = BoardCache::default();
    let mut mouse = MouseMapper::default();
    let mut ticker = TickTimer::new(TICK_INTERVAL, Instant::now());

    while !engine.should_quit() {
        // Results from background tasks and the signal handler
        engine.drain_pending_messages();

        // Render
        let mut drawn = None;
        terminal.draw(|frame| drawn = Some(render::view(frame, &engine.state, &mut cache)))?;
        if let Some(areas) = drawn {
            mouse.set_layout(areas, areas.board_grid(engine.state.settings.board.padding));
        }

        // Handle terminal events, waiting no longer than the next tick
        if let Some(message) = event::poll(&mut mouse, ticker.until_next(Instant::now()))? {
            engine.process_message(message);
        }

        // Animation and spinner advance on wall-clock ticks
        if ticker.fire(Instant::now()) {
            engine.process_message(Message::Tick);
        }
    }

    Ok(())
}
