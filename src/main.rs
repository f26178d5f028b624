//! `MealScout` - TUI client for browsing recipes from TheMealDB
//!
//! Entry point for the application.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use mealscout::app::App;
use mealscout::cli::Args;
use mealscout::config::Config;
use mealscout::logging;
use mealscout::tui::TerminalEventGuard;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Configuration and logging errors are reported before the terminal is
    // taken over, so they stay readable.
    let config = Config::load(&args)?;
    logging::init(&config)?;

    // Initialize the terminal with crossterm backend
    let mut terminal = ratatui::init();

    // Run the application
    let result = run_app(&mut terminal, &config);

    // Restore the terminal
    ratatui::restore();

    if let Err(e) = &result {
        log::error!("exiting with error: {e:#}");
    }
    result
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, config: &Config) -> Result<()> {
    // Enable terminal event modes (bracketed paste, mouse capture).
    // The guard ensures cleanup even if the application panics.
    //
    // IMPORTANT: This must be initialized after ratatui::init because its
    // terminal initialization can reset terminal flags.
    let _event_guard = TerminalEventGuard::new();

    // Requests a random recipe right away
    let mut app = App::new(config)?;

    loop {
        // Layout calculation must happen inside the draw closure to ensure it
        // uses the exact same area as rendering
        terminal.draw(|frame| {
            app.update_layout(frame.area());
            app.render(frame);
        })?;

        // Poll for events with a short timeout
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse);
                }
                Event::Paste(text) => {
                    log::trace!("paste len={}", text.len());
                    app.handle_paste(&text);
                }
                _ => {}
            }
        }

        // Apply any finished requests
        app.process_events();

        if app.should_quit() {
            break;
        }
    }

    log::info!("shutting down");
    Ok(())
}
