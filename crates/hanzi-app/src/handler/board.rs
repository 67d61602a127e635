//! Board command and event handlers

use std::time::Instant;

use hanzi_core::prelude::*;
use hanzi_core::{CharacterStrokes, Point};

use crate::board::BoardEvent;
use crate::input_key::PointerPhase;
use crate::state::{AppState, STATUS_ANIMATING, STATUS_MISTAKE, STATUS_QUIZ, STATUS_QUIZ_COMPLETE};

use super::{UpdateAction, UpdateResult};

/// Translate board events into status changes
pub(crate) fn apply_board_events(state: &mut AppState, events: Vec<BoardEvent>) {
    for event in events {
        match event {
            BoardEvent::QuizComplete => {
                info!("Quiz complete for {:?}", state.board.character());
                state.set_status(STATUS_QUIZ_COMPLETE);
            }
            BoardEvent::Mistake { stroke, misses } => {
                debug!("Mistake on stroke {} ({} misses)", stroke, misses);
                state.set_status(STATUS_MISTAKE);
            }
            BoardEvent::StrokeAccepted { stroke } => {
                debug!("Stroke {} accepted", stroke);
            }
            BoardEvent::AnimationFinished => {
                debug!("Animation finished");
            }
        }
    }
}

pub(crate) fn handle_animate(state: &mut AppState) -> UpdateResult {
    state.set_status(STATUS_ANIMATING);
    let events = state.board.show_and_animate();
    apply_board_events(state, events);
    UpdateResult::none()
}

pub(crate) fn handle_start_quiz(state: &mut AppState) -> UpdateResult {
    state.set_status(STATUS_QUIZ);
    let events = state.board.start_quiz();
    apply_board_events(state, events);
    UpdateResult::none()
}

/// Demo scheduled after a lookup; leaves the status untouched
pub(crate) fn handle_auto_animate(state: &mut AppState, token: u64) -> UpdateResult {
    if !state.is_current_request(token) {
        debug!(
            "Ignoring stale auto-animate (token {}, current {})",
            token, state.request_token
        );
        return UpdateResult::none();
    }
    let events = state.board.show_and_animate();
    apply_board_events(state, events);
    UpdateResult::none()
}

pub(crate) fn handle_bind(state: &mut AppState, character: char) -> UpdateResult {
    if state.board.bind(character) {
        UpdateResult::action(UpdateAction::LoadStrokes { character })
    } else {
        UpdateResult::none()
    }
}

pub(crate) fn handle_strokes_loaded(
    state: &mut AppState,
    character: char,
    strokes: CharacterStrokes,
) -> UpdateResult {
    let events = state.board.load(character, strokes);
    apply_board_events(state, events);
    UpdateResult::none()
}

pub(crate) fn handle_strokes_failed(
    state: &mut AppState,
    character: char,
    error: &str,
) -> UpdateResult {
    warn!("Failed to load strokes for '{}': {}", character, error);
    state.board.load_failed(character);
    UpdateResult::none()
}

pub(crate) fn handle_pointer(state: &mut AppState, phase: PointerPhase, point: Point) -> UpdateResult {
    match phase {
        PointerPhase::Down => state.board.pointer_down(point),
        PointerPhase::Drag => state.board.pointer_move(point),
        PointerPhase::Up => {
            let events = state.board.pointer_up(point);
            apply_board_events(state, events);
        }
    }
    UpdateResult::none()
}

pub(crate) fn handle_tick(state: &mut AppState, now: Instant) -> UpdateResult {
    state.spinner_frame = state.spinner_frame.wrapping_add(1);
    let dt = state
        .last_tick
        .map(|last| now.saturating_duration_since(last))
        .unwrap_or_default();
    state.last_tick = Some(now);

    let events = state.board.advance(dt);
    apply_board_events(state, events);
    UpdateResult::none()
}
