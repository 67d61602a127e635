//! Screen layout definitions for the TUI
//!
//! The board is a fixed square: `rows` terminal rows high and `2 × rows`
//! columns wide, shrunk only when the terminal cannot fit it. Everything else
//! is laid out around it.

use hanzi_app::Button;
use hanzi_core::BoardGrid;
use ratatui::layout::{Constraint, Layout, Position, Rect};

pub const HEADER_HEIGHT: u16 = 3;
pub const CONTROLS_HEIGHT: u16 = 3;
pub const STATUS_HEIGHT: u16 = 1;
pub const BUTTON_ROW_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;

pub const INPUT_WIDTH: u16 = 16;
pub const BUTTON_WIDTH: u16 = 14;

/// Smallest board that still shows a recognisable character
const MIN_BOARD_ROWS: u16 = 4;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub input: Rect,
    pub generate: Rect,
    /// Board including its border
    pub board: Rect,
    pub status: Rect,
    pub animate: Rect,
    pub quiz: Rect,
    pub info: Rect,
    pub footer: Rect,
}

/// What a screen position lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Input,
    Button(Button),
    Board,
}

impl ScreenAreas {
    /// Board drawing area inside the border
    pub fn board_inner(&self) -> Rect {
        Rect {
            x: self.board.x.saturating_add(1),
            y: self.board.y.saturating_add(1),
            width: self.board.width.saturating_sub(2),
            height: self.board.height.saturating_sub(2),
        }
    }

    /// Dot grid matching the board's inner area
    pub fn board_grid(&self, padding: f64) -> BoardGrid {
        BoardGrid::for_rows(self.board_inner().height, padding)
    }

    /// Interactive element under `(column, row)`
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);
        if self.board_inner().contains(pos) {
            Some(Hit::Board)
        } else if self.input.contains(pos) {
            Some(Hit::Input)
        } else if self.generate.contains(pos) {
            Some(Hit::Button(Button::Generate))
        } else if self.animate.contains(pos) {
            Some(Hit::Button(Button::Animate))
        } else if self.quiz.contains(pos) {
            Some(Hit::Button(Button::Quiz))
        } else {
            None
        }
    }
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `board_rows` - Preferred board height in rows (inside the border)
pub fn create(area: Rect, board_rows: u16) -> ScreenAreas {
    let [header, controls, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(CONTROLS_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    // Fit the square board into the left half of the body
    let fit_height = body
        .height
        .saturating_sub(STATUS_HEIGHT + BUTTON_ROW_HEIGHT + 2);
    let fit_width = (body.width / 2).saturating_sub(2) / 2;
    let rows = board_rows.min(fit_height).min(fit_width).max(MIN_BOARD_ROWS);

    let board_width = rows * 2 + 2;
    let board_height = rows + 2;
    let left_width = board_width.max(BUTTON_WIDTH * 2 + 1).min(body.width);

    let left = Rect {
        width: left_width,
        ..body
    };
    let info = Rect {
        x: left.right().saturating_add(1).min(body.right()),
        y: body.y,
        width: body.width.saturating_sub(left_width + 1),
        height: body.height,
    };

    let [board_row, status, buttons, _] = Layout::vertical([
        Constraint::Length(board_height),
        Constraint::Length(STATUS_HEIGHT),
        Constraint::Length(BUTTON_ROW_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(left);

    let board = centered(board_row, board_width, board_height);

    let buttons = centered(buttons, BUTTON_WIDTH * 2 + 1, BUTTON_ROW_HEIGHT);
    let [animate, _, quiz] = Layout::horizontal([
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(1),
        Constraint::Length(BUTTON_WIDTH),
    ])
    .areas(buttons);

    let [input, _, generate, _] = Layout::horizontal([
        Constraint::Length(INPUT_WIDTH),
        Constraint::Length(1),
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Min(0),
    ])
    .areas(controls);

    ScreenAreas {
        header,
        input,
        generate,
        board,
        status,
        animate,
        quiz,
        info,
        footer,
    }
}

/// `width × height` rectangle centred horizontally in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_fits_standard_terminal() {
        let layout = create(Rect::new(0, 0, 80, 24), 16);

        // 24 - header(3) - controls(3) - footer(1) = 17 body rows;
        // status, buttons and the border leave 11 for the board
        assert_eq!(layout.board_inner().height, 11);
        assert_eq!(layout.board_inner().width, 22);
        assert_eq!(layout.board.y, 6);
        assert_eq!(layout.status.y, 19);
        assert_eq!(layout.animate.y, 20);
        assert_eq!(layout.footer.y, 23);
    }

    #[test]
    fn test_board_uses_preferred_size_when_room() {
        let layout = create(Rect::new(0, 0, 120, 40), 16);
        assert_eq!(layout.board_inner().height, 16);
        assert_eq!(layout.board_inner().width, 32);
    }

    #[test]
    fn test_grid_matches_board_cells() {
        let layout = create(Rect::new(0, 0, 120, 40), 16);
        let grid = layout.board_grid(0.06);
        let inner = layout.board_inner();
        assert_eq!(grid.cell_size(), (inner.width, inner.height));
    }

    #[test]
    fn test_info_panel_right_of_board() {
        let layout = create(Rect::new(0, 0, 120, 40), 16);
        assert!(layout.info.x > layout.board.right());
        assert_eq!(layout.info.right(), 120);
        assert!(layout.info.width > 0);
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let layout = create(Rect::new(0, 0, 80, 24), 16);
        assert!(!layout.animate.intersects(layout.quiz));
        assert!(!layout.input.intersects(layout.generate));
        assert_eq!(layout.animate.width, BUTTON_WIDTH);
    }

    #[test]
    fn test_hit_testing() {
        let layout = create(Rect::new(0, 0, 80, 24), 16);
        let inner = layout.board_inner();

        assert_eq!(layout.hit(inner.x, inner.y), Some(Hit::Board));
        assert_eq!(layout.hit(layout.input.x + 1, layout.input.y + 1), Some(Hit::Input));
        assert_eq!(
            layout.hit(layout.generate.x, layout.generate.y),
            Some(Hit::Button(Button::Generate))
        );
        assert_eq!(
            layout.hit(layout.quiz.x + 2, layout.quiz.y + 1),
            Some(Hit::Button(Button::Quiz))
        );
        // The board border is not part of the drawing area
        assert_eq!(layout.hit(layout.board.x, layout.board.y), None);
        assert_eq!(layout.hit(0, 0), None);
    }
}
