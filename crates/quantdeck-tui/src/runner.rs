//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use quantdeck_app::{process, signals, AppState, Message, Settings};
use quantdeck_content::ContentProvider;
use quantdeck_core::{Error, Result};
use tracing::info;
use tokio::sync::mpsc;

use super::{event, render};

/// Install a panic hook that restores the terminal
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Run the dashboard until the user quits
pub async fn run<P>(settings: Settings, provider: P) -> Result<()>
where
    P: ContentProvider + Send + Sync + 'static,
{
    install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let mut state = AppState::with_settings(&settings);
    info!("Starting dashboard on {}", state.active_section);

    // Fetch completions and signals share one channel
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let provider = Arc::new(provider);
    process::start(&mut state, &msg_tx, &provider);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &provider);

    ratatui::restore();
    info!("Dashboard stopped");
    result
}

/// Main event loop
fn run_loop<P>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    provider: &Arc<P>,
) -> Result<()>
where
    P: ContentProvider + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Fetch results and signals (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, provider);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx, provider);
        }
    }

    Ok(())
}
