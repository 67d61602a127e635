//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub const TITLE: &str = "汉字笔画学习器";
pub const SUBTITLE: &str = "Interactive Stroke Order Practice Board";

/// Title and subtitle, centred in a rounded container
pub struct MainHeader;

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::raw("✍ "),
            Span::styled(TITLE, styles::accent_bold()),
            Span::raw("  "),
            Span::styled(SUBTITLE, styles::text_muted()),
        ]);
        Paragraph::new(line).centered().render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title() {
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(MainHeader, term.area());
        assert!(term.buffer_contains("汉字笔画学习器"));
        assert!(term.buffer_contains("Interactive Stroke Order Practice Board"));
    }

    #[test]
    fn test_header_in_narrow_terminal_does_not_panic() {
        let mut term = TestTerminal::with_size(10, 3);
        term.render_widget(MainHeader, term.area());
    }
}
