//! Message processing
//!
//! Runs a message and its follow-ups through the TEA update function and
//! dispatches the resulting actions.

use std::sync::Arc;

use quantdeck_content::ContentProvider;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<P>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    provider: &Arc<P>,
) where
    P: ContentProvider + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), provider.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

/// Start the first load cycle for the active section
pub fn start<P>(state: &mut AppState, msg_tx: &mpsc::Sender<Message>, provider: &Arc<P>)
where
    P: ContentProvider + Send + Sync + 'static,
{
    let section = state.active_section;
    process_message(state, Message::SelectSection(section), msg_tx, provider);
}
