//! Main update function - handles state transitions (TEA pattern)

use std::time::{Duration, Instant};

use hanzi_core::prelude::*;
use hanzi_core::{first_ideograph, CharacterData};

use crate::message::Message;
use crate::state::{
    status_loaded, AppPhase, AppState, Button, STATUS_ANALYZING, STATUS_FETCH_FAILED,
    STATUS_INVALID_INPUT,
};

use super::{board, keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Paste(text) => {
            // Only the first visible character fits in the field
            if let Some(c) = text.chars().find(|c| !c.is_whitespace()) {
                state.input = c.to_string();
            }
            UpdateResult::none()
        }

        Message::Tick => board::handle_tick(state, Instant::now()),

        // ─────────────────────────────────────────────────────────
        // Input field and focus
        // ─────────────────────────────────────────────────────────
        Message::SetInput(text) => {
            state.input = text.chars().next().map(String::from).unwrap_or_default();
            UpdateResult::none()
        }

        Message::ClearInput => {
            state.input.clear();
            UpdateResult::none()
        }

        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.focus = state.focus.prev();
            UpdateResult::none()
        }

        Message::SetFocus(focus) => {
            state.focus = focus;
            UpdateResult::none()
        }

        Message::ActivateButton(button) => match button {
            Button::Generate if state.loading => {
                debug!("Generate button is disabled while loading");
                UpdateResult::none()
            }
            Button::Generate => UpdateResult::message(Message::Generate),
            Button::Animate => UpdateResult::message(Message::Animate),
            Button::Quiz => UpdateResult::message(Message::StartQuiz),
        },

        // ─────────────────────────────────────────────────────────
        // Shell operations
        // ─────────────────────────────────────────────────────────
        Message::Generate => handle_generate(state),
        Message::Animate => board::handle_animate(state),
        Message::StartQuiz => board::handle_start_quiz(state),
        Message::BindBoard(character) => board::handle_bind(state, character),

        Message::Pointer { phase, point } => board::handle_pointer(state, phase, point),

        // ─────────────────────────────────────────────────────────
        // Background results
        // ─────────────────────────────────────────────────────────
        Message::MetadataLoaded { token, data } => handle_metadata_loaded(state, token, data),

        Message::MetadataFailed { token, error } => {
            if !state.is_current_request(token) {
                debug!("Ignoring stale metadata failure (token {})", token);
                return UpdateResult::none();
            }
            warn!("Metadata request failed: {}", error);
            state.loading = false;
            state.set_status(STATUS_FETCH_FAILED);
            UpdateResult::none()
        }

        Message::StrokesLoaded { character, strokes } => {
            board::handle_strokes_loaded(state, character, strokes)
        }

        Message::StrokesFailed { character, error } => {
            board::handle_strokes_failed(state, character, &error)
        }

        Message::AutoAnimate { token } => board::handle_auto_animate(state, token),
    }
}

/// Validate the input, bind the board and start a metadata lookup
fn handle_generate(state: &mut AppState) -> UpdateResult {
    let Some(character) = first_ideograph(&state.input) else {
        debug!("Rejected input {:?}", state.input);
        state.set_status(STATUS_INVALID_INPUT);
        return UpdateResult::none();
    };

    let token = state.next_request_token();
    info!("Looking up '{}' (request {})", character, token);

    state.loading = true;
    state.active_char = Some(character);
    state.set_status(STATUS_ANALYZING);

    UpdateResult::message_and_action(
        Message::BindBoard(character),
        UpdateAction::FetchMetadata { token, character },
    )
}

fn handle_metadata_loaded(state: &mut AppState, token: u64, data: CharacterData) -> UpdateResult {
    if !state.is_current_request(token) {
        debug!(
            "Ignoring stale metadata for '{}' (token {}, current {})",
            data.char, token, state.request_token
        );
        return UpdateResult::none();
    }

    let character = data.char.chars().next();
    state.char_data = Some(data);
    state.loading = false;
    if let Some(c) = character {
        state.set_status(status_loaded(c));
    }

    UpdateResult::action(UpdateAction::ScheduleAutoAnimate {
        token,
        delay: Duration::from_millis(state.settings.board.auto_animate_delay_ms),
    })
}
