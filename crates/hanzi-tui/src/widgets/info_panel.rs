//! Character details panel
//!
//! Pure projection of the lookup state: skeleton while loading, a prompt when
//! nothing has been looked up, the details otherwise.

use hanzi_core::CharacterData;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

pub const EMPTY_PROMPT: &str = "请输入汉字开始学习";
pub const DETAILS_TITLE: &str = "汉字详情";

pub struct InfoPanel<'a> {
    data: Option<&'a CharacterData>,
    loading: bool,
}

impl<'a> InfoPanel<'a> {
    pub fn new(data: Option<&'a CharacterData>, loading: bool) -> Self {
        Self { data, loading }
    }
}

impl Widget for InfoPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        match (self.loading, self.data) {
            (true, _) => render_skeleton(inner, buf),
            (false, None) => render_empty(inner, buf),
            (false, Some(data)) => render_details(data, inner, buf),
        }
    }
}

fn render_skeleton(area: Rect, buf: &mut Buffer) {
    let bar = |fraction: f64| {
        let width = ((area.width as f64 * fraction) as usize).max(1);
        Line::from(Span::styled(
            "▆".repeat(width),
            Style::default().fg(palette::SKELETON),
        ))
        .centered()
    };
    let lines = vec![
        Line::default(),
        bar(1.0 / 3.0),
        Line::default(),
        bar(0.5),
        Line::default(),
        Line::default(),
        bar(0.9),
        bar(0.9),
        bar(0.9),
    ];
    Paragraph::new(lines).render(area, buf);
}

fn render_empty(area: Rect, buf: &mut Buffer) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);
    let lines = vec![
        Line::from(Span::styled("?", styles::text_muted())).centered(),
        Line::default(),
        Line::from(Span::styled(EMPTY_PROMPT, styles::text_muted())).centered(),
    ];
    Paragraph::new(lines).render(middle, buf);
}

fn render_details(data: &CharacterData, area: Rect, buf: &mut Buffer) {
    let label = Style::default()
        .fg(palette::TEXT_SECONDARY)
        .add_modifier(Modifier::BOLD);

    let [title, pinyin, definition, example] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(5),
    ])
    .areas(area);

    Paragraph::new(Line::from(vec![
        Span::raw(" 📖 "),
        Span::styled(
            DETAILS_TITLE,
            Style::default()
                .fg(palette::TITLE_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::BOTTOM).border_style(styles::border_inactive()))
    .render(title, buf);

    // Label on the left, pinyin right-aligned on the same row
    Paragraph::new(Line::from(Span::styled(" 拼音 (Pinyin)", label))).render(pinyin, buf);
    Paragraph::new(Line::from(Span::styled(
        format!("{} ", data.pinyin),
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )))
    .right_aligned()
    .render(pinyin, buf);

    Paragraph::new(vec![
        Line::from(Span::styled(" 释义 (Meaning)", label)),
        Line::from(Span::styled(format!(" {}", data.definition), styles::text_primary())),
    ])
    .wrap(Wrap { trim: false })
    .render(definition, buf);

    let mut lines = vec![Line::from(Span::styled(
        "Example / 例句",
        Style::default()
            .fg(palette::EXAMPLE_AMBER)
            .add_modifier(Modifier::BOLD),
    ))];
    if data.has_example() {
        lines.push(Line::from(Span::styled(
            format!("\"{}\"", data.example_sentence),
            styles::text_primary(),
        )));
        lines.push(Line::from(Span::styled(
            data.example_sentence_meaning.as_str(),
            styles::text_secondary().add_modifier(Modifier::ITALIC),
        )));
    }
    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(ratatui::widgets::BorderType::Rounded)
                .border_style(Style::default().fg(palette::EXAMPLE_AMBER)),
        )
        .wrap(Wrap { trim: false })
        .render(example, buf);
}
