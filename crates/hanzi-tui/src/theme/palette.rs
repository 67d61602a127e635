//! Color palette for the practice board.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Green;

// --- Accent ---
pub const ACCENT: Color = Color::Green;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const CONTRAST_FG: Color = Color::Black;

// --- Buttons ---
pub const BUTTON_GENERATE: Color = Color::Green;
pub const BUTTON_ANIMATE: Color = Color::Blue;
pub const BUTTON_QUIZ: Color = Color::Gray;

// --- Info panel ---
pub const TITLE_GREEN: Color = Color::Green;
pub const EXAMPLE_AMBER: Color = Color::Yellow;
pub const SKELETON: Color = Color::DarkGray;

// --- Board layers (Tian Zi Ge guide up to the live trace) ---
pub const BOARD_GUIDE: Color = Color::Rgb(60, 60, 60);
pub const BOARD_OUTLINE: Color = Color::Rgb(110, 110, 110);
pub const BOARD_STROKE: Color = Color::White;
pub const BOARD_HINT: Color = Color::LightBlue;
pub const BOARD_TRACE: Color = Color::Yellow;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_layers_are_distinct() {
        let layers = [
            BOARD_GUIDE,
            BOARD_OUTLINE,
            BOARD_STROKE,
            BOARD_HINT,
            BOARD_TRACE,
        ];
        for (i, a) in layers.iter().enumerate() {
            for b in &layers[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
