//! Code pane rendering with token-driven syntax highlighting
//!
//! Highlighting comes straight from the scanner: each token is styled by its
//! [`TokenKind`], so what is colored as a keyword is exactly what the
//! rewriter will replace. Tokens spanning several lines (block comments,
//! continued directives, unterminated literals) are split at newlines.

use crate::config::TAB_WIDTH;
use crate::lexer::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

fn token_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Keyword => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        TokenKind::StringLiteral | TokenKind::CharLiteral => {
            Style::default().fg(DEFAULT_THEME.string)
        }
        TokenKind::Number => Style::default().fg(DEFAULT_THEME.number),
        TokenKind::Preprocessor => Style::default().fg(DEFAULT_THEME.preprocessor),
        TokenKind::BlockComment | TokenKind::LineComment => Style::default()
            .fg(DEFAULT_THEME.comment)
            .add_modifier(Modifier::ITALIC),
        TokenKind::Punctuation => Style::default().fg(DEFAULT_THEME.primary),
        TokenKind::Identifier | TokenKind::Operator | TokenKind::Other => {
            Style::default().fg(DEFAULT_THEME.fg)
        }
        TokenKind::Whitespace | TokenKind::Newline => Style::default(),
    }
}

/// Turn a token stream into styled display lines, one per source line.
pub fn highlight_tokens(tokens: &[Token]) -> Vec<Line<'static>> {
    let tab = " ".repeat(TAB_WIDTH);
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();

    for token in tokens {
        let style = token_style(token.kind);
        let mut parts = token.text.split('\n').peekable();

        while let Some(part) = parts.next() {
            let part = part.trim_end_matches('\r').replace('\t', &tab);
            if !part.is_empty() {
                spans.push(Span::styled(part, style));
            }
            if parts.peek().is_some() {
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
        }
    }

    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

/// Everything the code pane needs for one frame
pub struct SourceRenderData<'a> {
    pub title: &'a str,
    pub lines: &'a [Line<'static>],
    /// 1-based line numbers to flag
    pub marked_lines: &'a FxHashSet<usize>,
    pub is_output: bool,
}

/// Render one code pane starting at `scroll`
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    data: &SourceRenderData<'_>,
    scroll: usize,
) {
    let border_style = if data.is_output {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} ", data.title))
        .borders(Borders::ALL)
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders

    let visible_lines: Vec<Line> = data
        .lines
        .iter()
        .enumerate()
        .skip(scroll)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let (marker, num_style) = if data.marked_lines.contains(&line_num) {
                (
                    "!",
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(DEFAULT_THEME.comment))
            };

            let mut spans = vec![Span::styled(format!("{}{:4} ", marker, line_num), num_style)];
            spans.extend(line.spans.iter().cloned());
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::{builtin, Vocabulary};
    use crate::lexer::scan;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_one_line_per_source_line() {
        let source = "int x;\n/* a\nb */\n\n\tint y;\n";
        let tokens = scan(source, builtin().keywords(Vocabulary::Origin));
        let lines = highlight_tokens(&tokens);

        let texts: Vec<String> = lines.iter().map(line_text).collect();
        let expected: Vec<String> = source
            .lines()
            .map(|l| l.replace('\t', &" ".repeat(TAB_WIDTH)))
            .collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn test_keywords_are_bold() {
        let tokens = scan("void f;", builtin().keywords(Vocabulary::Origin));
        let lines = highlight_tokens(&tokens);
        let void_span = &lines[0].spans[0];
        assert_eq!(void_span.content, "void");
        assert!(void_span.style.add_modifier.contains(Modifier::BOLD));

        let f_span = lines[0].spans.iter().find(|s| s.content == "f").unwrap();
        assert!(!f_span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_crlf_is_stripped() {
        let tokens = scan("a\r\nb", builtin().keywords(Vocabulary::Origin));
        let texts: Vec<String> = highlight_tokens(&tokens).iter().map(line_text).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
