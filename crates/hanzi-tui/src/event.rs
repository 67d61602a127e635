//! Terminal event polling

use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use hanzi_app::{Focus, InputKey, Message, PointerPhase};
use hanzi_core::prelude::*;
use hanzi_core::BoardGrid;
use ratatui::layout::Rect;

use crate::layout::{Hit, ScreenAreas};

/// Cadence of `Tick` messages (20 FPS)
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Paces `Tick` messages on wall-clock time, so a steady stream of input
/// events (mouse motion) cannot starve animations.
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    interval: Duration,
    last: Instant,
}

impl TickTimer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    /// Time left before the next tick is due
    pub fn until_next(&self, now: Instant) -> Duration {
        (self.last + self.interval).saturating_duration_since(now)
    }

    /// Whether a tick is due at `now`; restarts the interval when it is
    pub fn fire(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }
}

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None, // Unsupported keys ignored
    }
}

/// Maps mouse events onto the last rendered layout.
///
/// A gesture that starts on the board keeps reporting to the board (clamped
/// to its edge) until the button is released.
#[derive(Debug, Default)]
pub struct MouseMapper {
    layout: Option<(ScreenAreas, BoardGrid)>,
    pressed_on_board: bool,
}

impl MouseMapper {
    /// Record the layout of the frame just drawn
    pub fn set_layout(&mut self, areas: ScreenAreas, grid: BoardGrid) {
        self.layout = Some((areas, grid));
    }

    pub fn map(&mut self, mouse: MouseEvent) -> Option<Message> {
        let (areas, grid) = self.layout?;
        let inner = areas.board_inner();

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match areas.hit(mouse.column, mouse.row)? {
                    Hit::Board => {
                        self.pressed_on_board = true;
                        Some(Message::Pointer {
                            phase: PointerPhase::Down,
                            point: cell_to_point(inner, grid, mouse.column, mouse.row),
                        })
                    }
                    Hit::Input => Some(Message::SetFocus(Focus::Input)),
                    Hit::Button(button) => Some(Message::ActivateButton(button)),
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if self.pressed_on_board => {
                Some(Message::Pointer {
                    phase: PointerPhase::Drag,
                    point: cell_to_point(inner, grid, mouse.column, mouse.row),
                })
            }
            MouseEventKind::Up(MouseButton::Left) if self.pressed_on_board => {
                self.pressed_on_board = false;
                Some(Message::Pointer {
                    phase: PointerPhase::Up,
                    point: cell_to_point(inner, grid, mouse.column, mouse.row),
                })
            }
            _ => None,
        }
    }
}

/// Board-space point for a terminal cell, clamped to the board
fn cell_to_point(inner: Rect, grid: BoardGrid, column: u16, row: u16) -> hanzi_core::Point {
    let col = column
        .clamp(inner.x, inner.right().saturating_sub(1).max(inner.x))
        - inner.x;
    let row = row
        .clamp(inner.y, inner.bottom().saturating_sub(1).max(inner.y))
        - inner.y;
    grid.cell_to_board(col, row)
}

/// Poll for a terminal event, waiting at most `timeout`
pub fn poll(mouse: &mut MouseMapper, timeout: Duration) -> Result<Option<Message>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    let message = match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(event) => mouse.map(event),
        Event::Paste(text) => Some(Message::Paste(text)),
        _ => None,
    };
    Ok(message)
}
