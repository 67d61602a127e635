//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers
//! - `board`: Board command and event handlers

pub(crate) mod board;
pub(crate) mod keys;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Look up metadata for `character`, tagged with the request token
    FetchMetadata { token: u64, character: char },

    /// Fetch and parse stroke data for `character`
    LoadStrokes { character: char },

    /// Post `Message::AutoAnimate { token }` after `delay`
    ScheduleAutoAnimate { token: u64, delay: Duration },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Both a follow-up message and an action
    pub fn message_and_action(msg: Message, action: UpdateAction) -> Self {
        Self {
            message: Some(msg),
            action: Some(action),
        }
    }
}
