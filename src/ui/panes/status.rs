//! Status bar rendering with keybindings and conversion counters

use crate::keywords::Direction;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Key bindings shown on the right, in display order
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("↑/↓", "scroll"),
    ("PgUp/PgDn", "page"),
    ("Home/End", "top/bottom"),
    ("d", "flip"),
    ("s", "swap"),
    ("q", "quit"),
];

pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub direction: Direction,
    pub replaced: usize,
    pub collisions: usize,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData<'_>) {
    let layout = Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bar_style = Style::default().bg(DEFAULT_THEME.status_bg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);

    // Left side: direction and message
    let left_spans = vec![
        Span::styled(
            format!(" {} ", data.direction),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", sep_style),
        Span::styled(format!(" {} ", data.message), bar_style.fg(DEFAULT_THEME.fg)),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_style)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: counters and keybinds
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_style.fg(DEFAULT_THEME.fg);

    let collision_badge = if data.collisions == 0 {
        Span::styled(
            " no collisions ",
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black),
        )
    } else {
        Span::styled(
            format!(" {} collisions ", data.collisions),
            Style::default()
                .bg(DEFAULT_THEME.error)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut right_spans = vec![
        Span::styled(
            format!(" {} replaced ", data.replaced),
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black),
        ),
        collision_badge,
        Span::styled("│", sep_style),
    ];
    for (key, desc) in KEY_HINTS {
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_style)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
