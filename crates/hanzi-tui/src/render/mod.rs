//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use hanzi_app::{AppState, Button, Focus};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout::{self, ScreenAreas};
use crate::theme::palette;
use crate::widgets::{
    ActionButton, BoardCache, Footer, InfoPanel, InputField, MainHeader, StatusLine, StrokeBoard,
};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`; `cache` only memoises the stroke raster.
/// Returns the areas drawn so mouse events can be mapped back onto them.
pub fn view(frame: &mut Frame, state: &AppState, cache: &mut BoardCache) -> ScreenAreas {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area, state.settings.board.rows);

    frame.render_widget(MainHeader, areas.header);

    frame.render_widget(
        InputField::new(&state.input, state.focus == Focus::Input),
        areas.input,
    );
    let mut generate = ActionButton::new(
        Button::Generate,
        state.focus == Focus::Button(Button::Generate),
    );
    if state.loading {
        generate = generate.busy(state.spinner_frame);
    }
    frame.render_widget(generate, areas.generate);

    let grid = areas.board_grid(state.settings.board.padding);
    let board = StrokeBoard::new(&state.board);
    match state.board.strokes() {
        Some(strokes) => {
            let raster = cache.raster(strokes, grid);
            frame.render_widget(board.raster(raster), areas.board);
        }
        None => frame.render_widget(board, areas.board),
    }

    frame.render_widget(StatusLine::new(&state.status), areas.status);

    for (button, rect) in [(Button::Animate, areas.animate), (Button::Quiz, areas.quiz)] {
        frame.render_widget(
            ActionButton::new(button, state.focus == Focus::Button(button)),
            rect,
        );
    }

    frame.render_widget(
        InfoPanel::new(state.char_data.as_ref(), state.loading),
        areas.info,
    );

    frame.render_widget(Footer, areas.footer);

    areas
}
