//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use quantdeck_content::ContentProvider;
use quantdeck_core::Section;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<P>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, provider: Arc<P>)
where
    P: ContentProvider + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchContent {
            section,
            generation,
        } => {
            tokio::spawn(async move {
                let message = fetch_content(provider.as_ref(), section, generation).await;
                if msg_tx.send(message).await.is_err() {
                    debug!("Event loop closed before {} finished loading", section);
                }
            });
        }
    }
}

/// Run one fetch and turn its outcome into a load message
pub async fn fetch_content<P>(provider: &P, section: Section, generation: u64) -> Message
where
    P: ContentProvider + Sync,
{
    match provider.fetch(section).await {
        Ok(content) => Message::ContentLoaded {
            generation,
            section,
            content,
        },
        Err(e) => {
            if e.is_not_found() {
                warn!("No content registered for {}", section);
            } else if e.is_io() {
                debug!("Content source unavailable for {}: {}", section, e);
            }
            Message::ContentLoadFailed {
                generation,
                section,
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantdeck_content::test_utils::ScriptedProvider;
    use std::time::Duration;

    #[tokio::test]
    async fn test_fetch_action_reports_content() {
        let (tx, mut rx) = mpsc::channel(4);
        let provider = Arc::new(ScriptedProvider::new());

        handle_action(
            UpdateAction::FetchContent {
                section: Section::AlphaLibrary,
                generation: 3,
            },
            tx,
            provider.clone(),
        );

        match rx.recv().await {
            Some(Message::ContentLoaded {
                generation,
                section,
                ..
            }) => {
                assert_eq!(generation, 3);
                assert_eq!(section, Section::AlphaLibrary);
            }
            other => panic!("expected ContentLoaded, got {other:?}"),
        }
        assert_eq!(provider.calls(), vec![Section::AlphaLibrary]);
    }

    #[tokio::test]
    async fn test_fetch_action_reports_failure() {
        let (tx, mut rx) = mpsc::channel(4);
        let provider = Arc::new(ScriptedProvider::new().failing(Section::ReplicationTest, "down"));

        handle_action(
            UpdateAction::FetchContent {
                section: Section::ReplicationTest,
                generation: 1,
            },
            tx,
            provider,
        );

        match rx.recv().await {
            Some(Message::ContentLoadFailed { error, .. }) => assert!(error.contains("down")),
            other => panic!("expected ContentLoadFailed, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_is_asynchronous() {
        let (tx, mut rx) = mpsc::channel(4);
        let provider =
            Arc::new(ScriptedProvider::new().with_delay(Section::Objective, Duration::from_secs(1)));

        handle_action(
            UpdateAction::FetchContent {
                section: Section::Objective,
                generation: 1,
            },
            tx,
            provider,
        );

        assert!(rx.try_recv().is_err());
        assert!(matches!(
            rx.recv().await,
            Some(Message::ContentLoaded { .. })
        ));
    }

    #[tokio::test]
    async fn test_closed_channel_is_not_an_error() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        handle_action(
            UpdateAction::FetchContent {
                section: Section::Objective,
                generation: 1,
            },
            tx,
            Arc::new(ScriptedProvider::new()),
        );
        tokio::task::yield_now().await;
    }
}
