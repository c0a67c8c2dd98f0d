//! Terminal UI for tic-tac-toe against the Shifu opponent.

#![warn(missing_docs)]

mod app;
mod orchestrator;
mod players;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::{App, SessionPhase};
use orchestrator::{GameEvent, Orchestrator, SessionControl};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("starting shifu TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Keys to the human player, events to the UI, session decisions
    // back to the orchestrator.
    let (key_tx, key_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (control_tx, control_rx) = mpsc::unbounded_channel();

    let mut orchestrator = Orchestrator::new(key_rx, event_tx, control_rx);
    let orchestrator_handle = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            tracing::error!(error = %e, "orchestrator error");
        }
    });

    let app = App::new();
    let res = run_app(&mut terminal, app, key_tx, control_tx, &mut event_rx).await;

    orchestrator_handle.abort();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    key_tx: mpsc::UnboundedSender<KeyCode>,
    control_tx: mpsc::UnboundedSender<SessionControl>,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Drain events from the orchestrator.
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (app.phase(), key.code) {
                    (_, KeyCode::Char('q')) => {
                        let _ = control_tx.send(SessionControl::Quit);
                        return Ok(());
                    }
                    (SessionPhase::AwaitingReplay, KeyCode::Char('y' | 'r')) => {
                        control_tx.send(SessionControl::PlayAgain)?;
                    }
                    (SessionPhase::AwaitingReplay, KeyCode::Char('n')) => {
                        let _ = control_tx.send(SessionControl::Quit);
                        app.end_session();
                        return Ok(());
                    }
                    (_, code) => {
                        // Everything else goes to the human player.
                        let _ = key_tx.send(code);
                    }
                }
            }
        }
    }
}
