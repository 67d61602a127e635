//! Input field and action buttons

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use hanzi_app::Button;

use crate::theme::{palette, styles};

pub const INPUT_PLACEHOLDER: &str = "输入汉字...";

/// Braille spinner frames, one per tick
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// One-character input field
pub struct InputField<'a> {
    text: &'a str,
    focused: bool,
}

impl<'a> InputField<'a> {
    pub fn new(text: &'a str, focused: bool) -> Self {
        Self { text, focused }
    }
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.text.is_empty() {
            Line::from(Span::styled(INPUT_PLACEHOLDER, styles::text_muted()))
        } else {
            Line::from(Span::styled(self.text, styles::text_primary()))
        };
        Paragraph::new(line).centered().render(inner, buf);
    }
}

/// Labels and colours per button
pub fn button_face(button: Button) -> (&'static str, &'static str, Color) {
    match button {
        Button::Generate => ("✎", "生成笔画", palette::BUTTON_GENERATE),
        Button::Animate => ("▶", "演示笔画", palette::BUTTON_ANIMATE),
        Button::Quiz => ("✓", "开始描红", palette::BUTTON_QUIZ),
    }
}

pub struct ActionButton {
    button: Button,
    focused: bool,
    busy_frame: Option<usize>,
}

impl ActionButton {
    pub fn new(button: Button, focused: bool) -> Self {
        Self {
            button,
            focused,
            busy_frame: None,
        }
    }

    /// Show a spinner instead of the icon and render as disabled
    pub fn busy(mut self, frame: usize) -> Self {
        self.busy_frame = Some(frame);
        self
    }
}

impl Widget for ActionButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (icon, label, color) = button_face(self.button);
        let disabled = self.busy_frame.is_some();
        let icon = match self.busy_frame {
            Some(frame) => SPINNER[frame % SPINNER.len()],
            None => icon,
        };

        let block = styles::glass_block(self.focused).border_style(Style::default().fg(color));
        let inner = block.inner(area);
        block.render(area, buf);

        let style = styles::button(color, self.focused, disabled);
        buf.set_style(inner, style);
        let line = Line::from(vec![
            Span::styled(icon, style),
            Span::styled(" ", style),
            Span::styled(label, style),
        ]);
        Paragraph::new(line).centered().render(inner, buf);
    }
}
