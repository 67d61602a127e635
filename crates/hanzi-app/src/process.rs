//! Message processing
//!
//! Runs a message through the TEA update function, follows up on chained
//! messages and dispatches the resulting actions.

use hanzi_backend::{MetadataSource, StrokeSource};
use tokio::sync::mpsc;

use crate::actions::{handle_action, Services};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<M, S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    services: &Services<M, S>,
) where
    M: MetadataSource + Sync + 'static,
    S: StrokeSource + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), services);
        }

        msg = result.message;
    }
}
