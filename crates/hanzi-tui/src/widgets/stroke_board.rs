//! Practice board widget
//!
//! Draws the Tian Zi Ge guide, the character outline, revealed strokes, the
//! hint stroke and the live trace as stacked braille layers.

use hanzi_app::{BoardModeKind, BoardState};
use hanzi_core::raster::{DOTS_PER_CELL_X, DOTS_PER_CELL_Y};
use hanzi_core::{BoardGrid, CharacterStrokes, Polyline, StrokeRaster};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::braille::{render_layers, BrailleCanvas};
use crate::theme::{palette, styles};

/// Caches the stroke raster between frames.
///
/// Rebuilt when the character or the grid changes.
#[derive(Debug, Default)]
pub struct BoardCache {
    raster: Option<StrokeRaster>,
}

impl BoardCache {
    pub fn raster(&mut self, strokes: &CharacterStrokes, grid: BoardGrid) -> &StrokeRaster {
        let stale = self
            .raster
            .as_ref()
            .map_or(true, |r| r.character() != strokes.character || r.grid() != grid);
        if stale {
            tracing::debug!("Rasterising '{}' at {} dots", strokes.character, grid.size);
            self.raster = None;
        }
        self.raster
            .get_or_insert_with(|| StrokeRaster::build(strokes, grid))
    }
}

/// Label shown in the board's top border
pub fn mode_badge(board: &BoardState) -> &'static str {
    match board.mode_kind() {
        BoardModeKind::Animating => "演示模式",
        BoardModeKind::Quizzing => "描红模式",
        BoardModeKind::Idle if board.is_loading() => "加载中",
        BoardModeKind::Idle | BoardModeKind::Previewing => "预览模式",
    }
}

pub struct StrokeBoard<'a> {
    board: &'a BoardState,
    raster: Option<&'a StrokeRaster>,
}

impl<'a> StrokeBoard<'a> {
    pub fn new(board: &'a BoardState) -> Self {
        Self {
            board,
            raster: None,
        }
    }

    /// Raster for the loaded strokes; without one only the guide is drawn
    pub fn raster(mut self, raster: &'a StrokeRaster) -> Self {
        self.raster = Some(raster);
        self
    }
}

impl Widget for StrokeBoard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let quizzing = self.board.mode_kind() == BoardModeKind::Quizzing;
        let badge = Span::styled(
            format!(" {} ", mode_badge(self.board)),
            styles::text_secondary().add_modifier(Modifier::BOLD),
        );
        let block = styles::glass_block(quizzing)
            .title(Line::from(badge).centered())
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let cols = inner.width as usize;
        let rows = inner.height as usize;
        let mut guide = BrailleCanvas::new(cols, rows);
        let mut outline = BrailleCanvas::new(cols, rows);
        let mut stroke = BrailleCanvas::new(cols, rows);
        let mut hint = BrailleCanvas::new(cols, rows);
        let mut trace = BrailleCanvas::new(cols, rows);

        let size = (cols * DOTS_PER_CELL_X).min(rows * DOTS_PER_CELL_Y);
        let covered = |x: usize, y: usize| self.raster.and_then(|r| r.at(x, y)).is_some();
        draw_guide(&mut guide, size, covered);

        if let Some(raster) = self.raster {
            let hint_stroke = self.board.hint_stroke();
            let grid = raster.grid();
            for y in 0..grid.size {
                for x in 0..grid.size {
                    let Some(dot) = raster.at(x, y) else {
                        continue;
                    };
                    let reveal = self.board.stroke_reveal(dot.stroke);
                    let drawn = reveal >= 1.0 || (reveal > 0.0 && dot.fraction <= reveal);
                    if drawn {
                        stroke.set(x, y);
                    } else if hint_stroke == Some(dot.stroke) {
                        hint.set(x, y);
                    } else {
                        outline.set(x, y);
                    }
                }
            }

            if let Some(points) = self.board.trace() {
                draw_trace(&mut trace, points, grid);
            }
        }

        render_layers(
            &[
                (&guide, palette::BOARD_GUIDE),
                (&outline, palette::BOARD_OUTLINE),
                (&stroke, palette::BOARD_STROKE),
                (&hint, palette::BOARD_HINT),
                (&trace, palette::BOARD_TRACE),
            ],
            buf,
            inner,
        );
    }
}

/// Dashed midlines and diagonals of a `size × size` dot square
fn draw_guide(canvas: &mut BrailleCanvas, size: usize, covered: impl Fn(usize, usize) -> bool) {
    if size == 0 {
        return;
    }
    let mid = size / 2;
    let mut set = |x: usize, y: usize| {
        if !covered(x, y) {
            canvas.set(x, y);
        }
    };
    for i in (0..size).step_by(2) {
        set(mid, i);
        set(i, mid);
        set(i, i);
        set(size - 1 - i, i);
    }
}

/// Plot the trace polyline, densified to at least one sample per dot
fn draw_trace(canvas: &mut BrailleCanvas, trace: &Polyline, grid: BoardGrid) {
    let points = trace.points();
    if let [only] = points {
        if let Some((x, y)) = grid.board_to_dot(*only) {
            canvas.set(x, y);
        }
        return;
    }
    let dots_per_unit = grid.size as f64 / hanzi_core::CHAR_BOX_SIZE;
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let steps = ((a.distance(b) * dots_per_unit).ceil() as usize).max(1);
        for step in 0..=steps {
            let p = a.lerp(b, step as f64 / steps as f64);
            if let Some((x, y)) = grid.board_to_dot(p) {
                canvas.set(x, y);
            }
        }
    }
}
