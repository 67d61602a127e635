//! Braille dot canvas.
//!
//! Each terminal character cell represents a 2x4 grid of braille dots,
//! providing 2x horizontal and 4x vertical sub-character resolution.

use hanzi_core::raster::{DOTS_PER_CELL_X, DOTS_PER_CELL_Y};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

/// Braille dot bit positions indexed by [y % 4][x % 2].
///
/// ```text
/// Dot 1 (0x01) | Dot 4 (0x08)
/// Dot 2 (0x02) | Dot 5 (0x10)
/// Dot 3 (0x04) | Dot 6 (0x20)
/// Dot 7 (0x40) | Dot 8 (0x80)
/// ```
const BRAILLE_BIT_MAP: [[u8; 2]; 4] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// Base code point of the braille block
const BRAILLE_BASE: u32 = 0x2800;

/// Dot pattern per cell for a single layer.
///
/// Coordinates are in "dot space": x ranges 0..width*2, y ranges 0..height*4.
#[derive(Debug, Clone)]
pub(crate) struct BrailleCanvas {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl BrailleCanvas {
    /// Blank canvas of `width × height` character cells
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![0; width * height],
            width,
            height,
        }
    }

    /// Set the dot at `(x, y)`; out-of-bounds coordinates are ignored
    pub(crate) fn set(&mut self, x: usize, y: usize) {
        let col = x / DOTS_PER_CELL_X;
        let row = y / DOTS_PER_CELL_Y;
        if col >= self.width || row >= self.height {
            return;
        }
        self.cells[row * self.width + col] |= BRAILLE_BIT_MAP[y % DOTS_PER_CELL_Y][x % DOTS_PER_CELL_X];
    }

    /// Dot pattern of cell `(col, row)`
    pub(crate) fn bits(&self, col: usize, row: usize) -> u8 {
        if col >= self.width || row >= self.height {
            return 0;
        }
        self.cells[row * self.width + col]
    }
}

/// Braille character for a dot pattern
pub(crate) fn braille_char(bits: u8) -> char {
    char::from_u32(BRAILLE_BASE + bits as u32).unwrap_or('\u{2800}')
}

/// Draw stacked layers into `buf`.
///
/// Layers are given bottom to top. A cell shows the union of every layer's
/// dots, coloured by the topmost layer that has any dot in it.
pub(crate) fn render_layers(layers: &[(&BrailleCanvas, Color)], buf: &mut Buffer, area: Rect) {
    for row in 0..area.height as usize {
        for col in 0..area.width as usize {
            let mut bits = 0u8;
            let mut color = None;
            for (canvas, layer_color) in layers {
                let layer_bits = canvas.bits(col, row);
                if layer_bits != 0 {
                    bits |= layer_bits;
                    color = Some(*layer_color);
                }
            }
            let Some(color) = color else {
                continue;
            };
            let pos = (area.x + col as u16, area.y + row as u16);
            if let Some(cell) = buf.cell_mut(pos) {
                cell.set_char(braille_char(bits))
                    .set_style(Style::default().fg(color));
            }
        }
    }
}
