//! Message types for the application (TEA pattern)

use hanzi_core::{CharacterData, CharacterStrokes, Point};

use crate::input_key::{InputKey, PointerPhase};
use crate::state::{Button, Focus};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Text pasted into the terminal
    Paste(String),

    /// Pointer gesture on the board, in board coordinates
    Pointer { phase: PointerPhase, point: Point },

    /// Periodic tick driving animation and the spinner
    Tick,

    /// Quit immediately
    Quit,

    // ─────────────────────────────────────────────────────────
    // Input field and focus
    // ─────────────────────────────────────────────────────────
    /// Replace the input field contents
    SetInput(String),
    ClearInput,
    FocusNext,
    FocusPrev,
    SetFocus(Focus),
    /// Click, or Enter/Space on a focused button
    ActivateButton(Button),

    // ─────────────────────────────────────────────────────────
    // Shell operations
    // ─────────────────────────────────────────────────────────
    /// Validate the input and look the character up
    Generate,
    /// Play the stroke-order demo
    Animate,
    /// Start write-and-check mode
    StartQuiz,
    /// Bind the board to a character, loading its strokes if needed
    BindBoard(char),

    // ─────────────────────────────────────────────────────────
    // Background results
    // ─────────────────────────────────────────────────────────
    MetadataLoaded { token: u64, data: CharacterData },
    MetadataFailed { token: u64, error: String },
    StrokesLoaded {
        character: char,
        strokes: CharacterStrokes,
    },
    StrokesFailed { character: char, error: String },
    /// Delayed demo after a successful lookup
    AutoAnimate { token: u64 },
}
