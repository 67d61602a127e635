//! hanzi-app - Application state and orchestration for Hanzi Board
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the practice board state machine, the Engine abstraction that wires the
//! backends to the message loop, and configuration loading.

pub mod actions;
pub mod board;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod spawn;
pub mod state;

// Re-export primary types
pub use actions::Services;
pub use board::{BoardCommand, BoardEvent, BoardMode, BoardModeKind, BoardState};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::{InputKey, PointerPhase};
pub use message::Message;
pub use state::{AppPhase, AppState, Button, Focus};
