//! Status message under the board

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct StatusLine<'a> {
    message: &'a str,
}

impl<'a> StatusLine<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(Span::styled(
            self.message,
            styles::text_secondary().add_modifier(Modifier::BOLD),
        )))
        .centered()
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_status_message_rendered() {
        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(StatusLine::new("正在分析汉字..."), term.area());
        assert!(term.buffer_contains("正在分析汉字..."));
    }
}
