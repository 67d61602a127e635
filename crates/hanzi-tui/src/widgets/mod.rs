//! Custom widgets for the practice board TUI

mod braille;
mod controls;
mod footer;
mod header;
mod info_panel;
mod status_line;
mod stroke_board;

pub use controls::{button_face, ActionButton, InputField, INPUT_PLACEHOLDER};
pub use footer::{Footer, CREDITS};
pub use header::{MainHeader, SUBTITLE, TITLE};
pub use info_panel::{InfoPanel, DETAILS_TITLE, EMPTY_PROMPT};
pub use status_line::StatusLine;
pub use stroke_board::{mode_badge, BoardCache, StrokeBoard};
