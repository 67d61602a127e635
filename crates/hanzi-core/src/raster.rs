//! Mapping between board space and a square grid of dots
//!
//! The terminal board is drawn with braille characters, each holding a 2×4
//! block of dots. [`BoardGrid`] converts between dot/cell coordinates and the
//! 1024-unit board box; [`StrokeRaster`] precomputes which stroke (and how far
//! along it) covers every dot so animation frames are cheap to draw.

use crate::geometry::Point;
use crate::strokes::{CharacterStrokes, CHAR_BOX_SIZE};

/// Dots per braille cell horizontally
pub const DOTS_PER_CELL_X: usize = 2;

/// Dots per braille cell vertically
pub const DOTS_PER_CELL_Y: usize = 4;

/// A square grid of dots covering the character box with some padding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGrid {
    /// Side length in dots
    pub size: usize,
    /// Fraction of the side left empty around the character (per edge)
    pub padding: f64,
}

impl BoardGrid {
    /// Grid for a board `rows` terminal rows high (and `2 × rows` columns wide)
    pub fn for_rows(rows: u16, padding: f64) -> Self {
        Self {
            size: rows as usize * DOTS_PER_CELL_Y,
            padding: padding.clamp(0.0, 0.45),
        }
    }

    /// Rows and columns of terminal cells the grid occupies
    pub fn cell_size(&self) -> (u16, u16) {
        let cols = self.size.div_ceil(DOTS_PER_CELL_X) as u16;
        let rows = self.size.div_ceil(DOTS_PER_CELL_Y) as u16;
        (cols, rows)
    }

    fn scale(&self) -> f64 {
        let inner = self.size as f64 * (1.0 - 2.0 * self.padding);
        inner / CHAR_BOX_SIZE
    }

    fn offset(&self) -> f64 {
        self.size as f64 * self.padding
    }

    /// Board-space point at the centre of dot `(x, y)`
    pub fn dot_to_board(&self, x: usize, y: usize) -> Point {
        self.grid_to_board(x as f64 + 0.5, y as f64 + 0.5)
    }

    /// Board-space point for fractional grid coordinates
    pub fn grid_to_board(&self, x: f64, y: f64) -> Point {
        let scale = self.scale();
        let offset = self.offset();
        Point::new((x - offset) / scale, (y - offset) / scale)
    }

    /// Dot containing a board-space point, if it falls on the grid
    pub fn board_to_dot(&self, point: Point) -> Option<(usize, usize)> {
        let scale = self.scale();
        let offset = self.offset();
        let x = point.x * scale + offset;
        let y = point.y * scale + offset;
        let limit = self.size as f64;
        if x < 0.0 || y < 0.0 || x >= limit || y >= limit {
            return None;
        }
        Some((x as usize, y as usize))
    }

    /// Board-space point at the centre of terminal cell `(col, row)`,
    /// relative to the grid's top-left cell
    pub fn cell_to_board(&self, col: u16, row: u16) -> Point {
        self.grid_to_board(
            (col as usize * DOTS_PER_CELL_X) as f64 + DOTS_PER_CELL_X as f64 / 2.0,
            (row as usize * DOTS_PER_CELL_Y) as f64 + DOTS_PER_CELL_Y as f64 / 2.0,
        )
    }
}

/// Coverage of one dot by the character's strokes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotCoverage {
    pub stroke: usize,
    /// Position along the stroke median, `0.0..=1.0`
    pub fraction: f64,
}

/// Per-dot stroke coverage for one character on one grid
#[derive(Debug, Clone)]
pub struct StrokeRaster {
    grid: BoardGrid,
    character: char,
    dots: Vec<Option<DotCoverage>>,
}

impl StrokeRaster {
    pub fn build(strokes: &CharacterStrokes, grid: BoardGrid) -> Self {
        let mut dots = Vec::with_capacity(grid.size * grid.size);
        for y in 0..grid.size {
            for x in 0..grid.size {
                let coverage = strokes
                    .locate(grid.dot_to_board(x, y))
                    .map(|(stroke, fraction)| DotCoverage { stroke, fraction });
                dots.push(coverage);
            }
        }
        Self {
            grid,
            character: strokes.character,
            dots,
        }
    }

    pub fn grid(&self) -> BoardGrid {
        self.grid
    }

    pub fn character(&self) -> char {
        self.character
    }

    /// Coverage of dot `(x, y)`; `None` when empty or off the grid
    pub fn at(&self, x: usize, y: usize) -> Option<DotCoverage> {
        if x >= self.grid.size || y >= self.grid.size {
            return None;
        }
        self.dots[y * self.grid.size + x]
    }

    /// Number of dots covered by `stroke`
    pub fn stroke_area(&self, stroke: usize) -> usize {
        self.dots
            .iter()
            .filter(|d| matches!(d, Some(c) if c.stroke == stroke))
            .count()
    }
}
