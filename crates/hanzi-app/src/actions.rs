//! Action dispatch: turns `UpdateAction`s into background tasks

use std::sync::Arc;

use hanzi_backend::{MetadataSource, StrokeSource};
use tokio::sync::mpsc;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::spawn;

/// Backends used by the action handlers
#[derive(Debug)]
pub struct Services<M, S> {
    pub metadata: Arc<M>,
    pub strokes: Arc<S>,
}

impl<M, S> Services<M, S> {
    pub fn new(metadata: M, strokes: S) -> Self {
        Self {
            metadata: Arc::new(metadata),
            strokes: Arc::new(strokes),
        }
    }
}

impl<M, S> Clone for Services<M, S> {
    fn clone(&self) -> Self {
        Self {
            metadata: Arc::clone(&self.metadata),
            strokes: Arc::clone(&self.strokes),
        }
    }
}

/// Execute an action by spawning the matching background task
pub fn handle_action<M, S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    services: &Services<M, S>,
) where
    M: MetadataSource + Sync + 'static,
    S: StrokeSource + Sync + 'static,
{
    match action {
        UpdateAction::FetchMetadata { token, character } => {
            spawn::spawn_metadata_fetch(services.metadata.clone(), token, character, msg_tx);
        }
        UpdateAction::LoadStrokes { character } => {
            spawn::spawn_stroke_load(services.strokes.clone(), character, msg_tx);
        }
        UpdateAction::ScheduleAutoAnimate { token, delay } => {
            spawn::spawn_auto_animate(token, delay, msg_tx);
        }
    }
}
