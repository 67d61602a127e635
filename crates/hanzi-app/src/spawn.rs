//! Background tasks that report back through the message channel

use std::sync::Arc;
use std::time::Duration;

use hanzi_backend::{fetch_character_metadata, MetadataSource, StrokeSource};
use hanzi_core::prelude::*;
use hanzi_core::CharacterStrokes;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;

/// Look up metadata and post `MetadataLoaded` (or `MetadataFailed`)
pub fn spawn_metadata_fetch<M>(
    source: Arc<M>,
    token: u64,
    character: char,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    M: MetadataSource + Sync + 'static,
{
    tokio::spawn(async move {
        let text = character.to_string();
        let msg = match fetch_character_metadata(source.as_ref(), &text).await {
            Ok(data) => Message::MetadataLoaded { token, data },
            Err(e) => Message::MetadataFailed {
                token,
                error: e.to_string(),
            },
        };
        if msg_tx.send(msg).await.is_err() {
            debug!("Message channel closed before metadata for '{}' arrived", character);
        }
    })
}

/// Load and parse stroke data and post `StrokesLoaded` (or `StrokesFailed`)
pub fn spawn_stroke_load<S>(
    source: Arc<S>,
    character: char,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    S: StrokeSource + Sync + 'static,
{
    tokio::spawn(async move {
        let result = match source.load(character).await {
            Ok(data) => CharacterStrokes::from_data(character, &data),
            Err(e) => Err(e),
        };
        let msg = match result {
            Ok(strokes) => Message::StrokesLoaded { character, strokes },
            Err(e) => {
                // Network and data problems are routine; anything else
                // points at the configuration
                if !e.is_recoverable() {
                    error!("Stroke source misconfigured for '{}': {}", character, e);
                }
                Message::StrokesFailed {
                    character,
                    error: e.to_string(),
                }
            }
        };
        if msg_tx.send(msg).await.is_err() {
            debug!("Message channel closed before strokes for '{}' arrived", character);
        }
    })
}

/// Post `AutoAnimate { token }` after `delay`
pub fn spawn_auto_animate(
    token: u64,
    delay: Duration,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = msg_tx.send(Message::AutoAnimate { token }).await;
    })
}
