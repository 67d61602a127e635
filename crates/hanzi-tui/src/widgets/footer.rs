//! Footer with key hints and credits

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub const CREDITS: &str = "Powered by Hanzi Writer & Google Gemini";

const HINTS: &[(&str, &str)] = &[
    ("Enter", "生成"),
    ("F2", "演示"),
    ("F3", "描红"),
    ("Tab", "切换"),
    ("Esc", "退出"),
];

pub struct Footer;

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in HINTS {
            spans.push(Span::styled(*key, styles::accent_bold()));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);

        // Credits on the right unless they would cover the hints
        let hints_width: usize = 1 + HINTS
            .iter()
            .map(|(k, a)| k.len() + 1 + unicode_width::UnicodeWidthStr::width(*a) + 2)
            .sum::<usize>();
        if hints_width + CREDITS.len() + 1 <= area.width as usize {
            Paragraph::new(Line::from(Span::styled(
                format!("{CREDITS} "),
                styles::text_muted(),
            )))
            .right_aligned()
            .render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_footer_wide_shows_credits() {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(Footer, term.area());
        assert!(term.buffer_contains("F3"));
        assert!(term.buffer_contains(CREDITS));
    }

    #[test]
    fn test_footer_narrow_keeps_hints() {
        let mut term = TestTerminal::with_size(50, 1);
        term.render_widget(Footer, term.area());
        assert!(term.buffer_contains("Esc"));
        assert!(!term.buffer_contains(CREDITS));
    }
}
