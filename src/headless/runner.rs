//! Headless mode runner - section walk without TUI

use std::io::{self, Write};
use std::sync::Arc;

use quantdeck_app::{process, signals, AppState, Message, Settings, FAILURE_MESSAGE};
use quantdeck_content::ContentProvider;
use quantdeck_core::{Result, Section};
use tracing::info;
use tokio::sync::mpsc;

use super::HeadlessEvent;

/// Load each of `sections` in turn and print NDJSON events to stdout
pub async fn run_headless<P>(settings: Settings, provider: P, sections: Vec<Section>) -> Result<()>
where
    P: ContentProvider + Send + Sync + 'static,
{
    info!("quantdeck starting in HEADLESS mode ({} sections)", sections.len());

    let mut state = AppState::with_settings(&settings);
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let provider = Arc::new(provider);
    let mut stdout = io::stdout();
    let result = walk_sections(
        &mut state,
        &sections,
        &msg_tx,
        &mut msg_rx,
        &provider,
        &mut stdout,
    )
    .await;

    info!("quantdeck headless mode exiting");
    result
}

/// Select each section and wait for its fetch to settle
async fn walk_sections<P, W>(
    state: &mut AppState,
    sections: &[Section],
    msg_tx: &mpsc::Sender<Message>,
    msg_rx: &mut mpsc::Receiver<Message>,
    provider: &Arc<P>,
    out: &mut W,
) -> Result<()>
where
    P: ContentProvider + Send + Sync + 'static,
    W: Write,
{
    for &section in sections {
        if state.should_quit() {
            break;
        }

        process::process_message(state, Message::SelectSection(section), msg_tx, provider);
        HeadlessEvent::section_selected(section, state.load_generation).write_to(out)?;

        while state.loading && !state.should_quit() {
            let Some(msg) = msg_rx.recv().await else {
                info!("Message channel closed");
                return Ok(());
            };

            // Decide before processing; update() moves on to the next generation
            let event = settled_event(state, &msg);
            process::process_message(state, msg, msg_tx, provider);

            if let Some(event) = event {
                event.write_to(out)?;
            }
        }
    }

    if state.should_quit() {
        info!("Quit requested");
    }
    Ok(())
}

/// The event for a completion that belongs to the current load, if any
fn settled_event(state: &AppState, msg: &Message) -> Option<HeadlessEvent> {
    match msg {
        Message::ContentLoaded {
            generation,
            section,
            content,
        } if state.is_current(*generation) => {
            Some(HeadlessEvent::content_loaded(*section, content))
        }
        Message::ContentLoadFailed {
            generation,
            section,
            error,
        } if state.is_current(*generation) => Some(HeadlessEvent::load_failed(
            *section,
            error.clone(),
            FAILURE_MESSAGE,
        )),
        _ => None,
    }
}
