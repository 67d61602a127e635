//! Terminal setup and restoration

use std::io::{self, stdout};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_input_capture();
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Turn on mouse reporting and bracketed paste
pub fn enable_input_capture() -> io::Result<()> {
    execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)
}

pub fn disable_input_capture() -> io::Result<()> {
    execute!(stdout(), DisableBracketedPaste, DisableMouseCapture)
}
