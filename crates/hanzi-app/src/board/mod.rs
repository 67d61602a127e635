//! Stroke board state machine
//!
//! The board is bound to one character at a time. Stroke geometry arrives
//! asynchronously; commands issued before it arrives are remembered (latest
//! wins) and run once it loads.
//!
//! ```text
//! Idle ──load──▶ Previewing ──animate──▶ Animating ──finished──▶ Previewing
//!                    │  ▲
//!                  quiz └──────── last stroke accepted ──── Quizzing
//! ```

pub mod animation;
pub mod quiz;

use std::time::Duration;

use hanzi_core::prelude::*;
use hanzi_core::{CharacterStrokes, Point, Polyline, StrokeMatcher};

use crate::config::BoardSettings;

pub use animation::{stroke_duration, Animation, AnimationTiming};
pub use quiz::{Quiz, QuizStep};

/// Current board mode
#[derive(Debug, Clone, Default)]
pub enum BoardMode {
    /// No stroke data yet
    #[default]
    Idle,
    /// Character fully drawn over its outline
    Previewing,
    /// Playing the stroke-order demo
    Animating(Animation),
    /// Waiting for the user to draw stroke N
    Quizzing(Quiz),
}

impl BoardMode {
    pub fn kind(&self) -> BoardModeKind {
        match self {
            BoardMode::Idle => BoardModeKind::Idle,
            BoardMode::Previewing => BoardModeKind::Previewing,
            BoardMode::Animating(_) => BoardModeKind::Animating,
            BoardMode::Quizzing(_) => BoardModeKind::Quizzing,
        }
    }
}

/// Data-free view of [`BoardMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardModeKind {
    Idle,
    Previewing,
    Animating,
    Quizzing,
}

/// Board operations that need stroke data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardCommand {
    Animate,
    Quiz,
}

/// Notifications produced by board operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// Every stroke of the quiz was drawn correctly
    QuizComplete,
    /// A quiz trace did not match the expected stroke
    Mistake { stroke: usize, misses: u32 },
    /// A quiz trace matched the expected stroke
    StrokeAccepted { stroke: usize },
    /// The demo animation drew its last stroke
    AnimationFinished,
}

/// Stroke board bound to (at most) one character
#[derive(Debug, Clone)]
pub struct BoardState {
    character: Option<char>,
    strokes: Option<CharacterStrokes>,
    mode: BoardMode,
    pending: Option<BoardCommand>,
    load_failed: bool,
    timing: AnimationTiming,
    matcher: StrokeMatcher,
    hint_after_misses: u32,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(&BoardSettings::default())
    }
}

impl BoardState {
    pub fn new(settings: &BoardSettings) -> Self {
        Self {
            character: None,
            strokes: None,
            mode: BoardMode::Idle,
            pending: None,
            load_failed: false,
            timing: AnimationTiming {
                speed: settings.stroke_speed,
                delay_between_strokes: Duration::from_millis(settings.delay_between_strokes_ms),
            },
            matcher: StrokeMatcher::new(settings.leniency),
            hint_after_misses: settings.show_hint_after_misses,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Binding and loading
    // ─────────────────────────────────────────────────────────

    /// Bind the board to `character`.
    ///
    /// Returns true when stroke data must be (re)loaded: the character
    /// changed, or the previous load for it failed. Rebinding tears down any
    /// animation or quiz and forgets queued commands.
    pub fn bind(&mut self, character: char) -> bool {
        if self.character == Some(character) && !self.load_failed {
            return false;
        }
        debug!("Board bound to '{}'", character);
        self.character = Some(character);
        self.strokes = None;
        self.mode = BoardMode::Idle;
        self.pending = None;
        self.load_failed = false;
        true
    }

    /// Install stroke data for `character`.
    ///
    /// Data for any other character is ignored. Runs the queued command, if
    /// any; returns the events it produced.
    pub fn load(&mut self, character: char, strokes: CharacterStrokes) -> Vec<BoardEvent> {
        if self.character != Some(character) {
            debug!(
                "Ignoring strokes for '{}', board is bound to {:?}",
                character, self.character
            );
            return Vec::new();
        }
        debug!("Board loaded {} strokes for '{}'", strokes.len(), character);
        self.strokes = Some(strokes);
        self.mode = BoardMode::Previewing;
        self.load_failed = false;

        match self.pending.take() {
            Some(BoardCommand::Animate) => self.show_and_animate(),
            Some(BoardCommand::Quiz) => self.start_quiz(),
            None => Vec::new(),
        }
    }

    /// Record that loading strokes for `character` failed
    pub fn load_failed(&mut self, character: char) {
        if self.character == Some(character) {
            self.load_failed = true;
            self.pending = None;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────

    /// Play the stroke-order demo from the first stroke. Calling it again
    /// restarts the demo. Queued when no stroke data is loaded yet.
    pub fn show_and_animate(&mut self) -> Vec<BoardEvent> {
        let Some(strokes) = &self.strokes else {
            self.queue(BoardCommand::Animate);
            return Vec::new();
        };
        let animation = Animation::new(strokes, self.timing);
        if animation.is_finished() {
            self.mode = BoardMode::Previewing;
            return vec![BoardEvent::AnimationFinished];
        }
        self.mode = BoardMode::Animating(animation);
        Vec::new()
    }

    /// Switch to write-and-check mode. Queued when no stroke data is loaded yet.
    pub fn start_quiz(&mut self) -> Vec<BoardEvent> {
        if self.strokes.is_none() {
            self.queue(BoardCommand::Quiz);
            return Vec::new();
        }
        self.mode = BoardMode::Quizzing(Quiz::new());
        Vec::new()
    }

    fn queue(&mut self, command: BoardCommand) {
        if self.character.is_some() && !self.load_failed {
            debug!("Queueing {:?} until strokes load", command);
            self.pending = Some(command);
        }
    }

    /// Advance the animation clock
    pub fn advance(&mut self, dt: Duration) -> Vec<BoardEvent> {
        if let BoardMode::Animating(animation) = &mut self.mode {
            if animation.advance(dt) {
                self.mode = BoardMode::Previewing;
                return vec![BoardEvent::AnimationFinished];
            }
        }
        Vec::new()
    }

    // ─────────────────────────────────────────────────────────
    // Quiz input
    // ─────────────────────────────────────────────────────────

    pub fn pointer_down(&mut self, point: Point) {
        if let BoardMode::Quizzing(quiz) = &mut self.mode {
            quiz.pointer_down(point);
        }
    }

    pub fn pointer_move(&mut self, point: Point) {
        if let BoardMode::Quizzing(quiz) = &mut self.mode {
            quiz.pointer_move(point);
        }
    }

    pub fn pointer_up(&mut self, point: Point) -> Vec<BoardEvent> {
        let (BoardMode::Quizzing(quiz), Some(strokes)) = (&mut self.mode, &self.strokes) else {
            return Vec::new();
        };
        match quiz.pointer_up(point, strokes, &self.matcher) {
            Some(QuizStep::Accepted { stroke, complete }) => {
                let mut events = vec![BoardEvent::StrokeAccepted { stroke }];
                if complete {
                    self.mode = BoardMode::Previewing;
                    events.push(BoardEvent::QuizComplete);
                }
                events
            }
            Some(QuizStep::Missed { stroke, misses }) => {
                vec![BoardEvent::Mistake { stroke, misses }]
            }
            Some(QuizStep::Ignored) | None => Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Queries for rendering
    // ─────────────────────────────────────────────────────────

    pub fn character(&self) -> Option<char> {
        self.character
    }

    pub fn strokes(&self) -> Option<&CharacterStrokes> {
        self.strokes.as_ref()
    }

    pub fn mode(&self) -> &BoardMode {
        &self.mode
    }

    pub fn mode_kind(&self) -> BoardModeKind {
        self.mode.kind()
    }

    pub fn pending(&self) -> Option<BoardCommand> {
        self.pending
    }

    /// Bound but still waiting for stroke data
    pub fn is_loading(&self) -> bool {
        self.character.is_some() && self.strokes.is_none() && !self.load_failed
    }

    pub fn has_load_failed(&self) -> bool {
        self.load_failed
    }

    /// How much of `stroke` to draw, `0.0..=1.0`
    pub fn stroke_reveal(&self, stroke: usize) -> f64 {
        match &self.mode {
            BoardMode::Idle => 0.0,
            BoardMode::Previewing => 1.0,
            BoardMode::Animating(animation) => animation.progress(stroke),
            BoardMode::Quizzing(quiz) => {
                if stroke < quiz.current_stroke() {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Stroke to highlight after repeated misses
    pub fn hint_stroke(&self) -> Option<usize> {
        match &self.mode {
            BoardMode::Quizzing(quiz)
                if self.hint_after_misses > 0 && quiz.misses() >= self.hint_after_misses =>
            {
                Some(quiz.current_stroke())
            }
            _ => None,
        }
    }

    /// User trace in progress
    pub fn trace(&self) -> Option<&Polyline> {
        match &self.mode {
            BoardMode::Quizzing(quiz) => quiz.trace(),
            _ => None,
        }
    }
}
