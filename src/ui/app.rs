//! Preview application state and event loop

use crate::config::TUI_POLL_MS;
use crate::keywords::{Dictionary, Direction};
use crate::lexer::scan;
use crate::rewriter::Translator;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction as LayoutDirection, Layout},
    text::Line,
    Frame, Terminal,
};
use rustc_hash::FxHashSet;
use std::io;
use std::time::Duration;

/// The preview application state
pub struct App<'d> {
    dictionary: &'d Dictionary,

    /// Text shown in the left pane
    pub source_code: String,

    /// Converted text shown in the right pane
    pub output_code: String,

    pub direction: Direction,

    /// Highlighted lines of each pane
    pub input_lines: Vec<Line<'static>>,
    pub output_lines: Vec<Line<'static>>,

    /// Input lines holding an identifier that collides with an output keyword
    pub collision_lines: FxHashSet<usize>,

    pub replaced: usize,
    pub collisions: usize,

    /// Shared scroll offset; both panes have the same line structure
    pub scroll: usize,

    /// Pane height seen at the last render, for paging
    page_height: usize,

    pub should_quit: bool,

    pub status_message: String,
}

impl<'d> App<'d> {
    pub fn new(dictionary: &'d Dictionary, source_code: String, direction: Direction) -> Self {
        let mut app = App {
            dictionary,
            source_code,
            output_code: String::new(),
            direction,
            input_lines: Vec::new(),
            output_lines: Vec::new(),
            collision_lines: FxHashSet::default(),
            replaced: 0,
            collisions: 0,
            scroll: 0,
            page_height: 1,
            should_quit: false,
            status_message: String::from("Ready!"),
        };
        app.refresh();
        app
    }

    /// Re-run the conversion for the current source and direction.
    pub fn refresh(&mut self) {
        let translator = Translator::new(self.dictionary, self.direction);
        let input_tokens = translator.scan(&self.source_code);
        let translation = translator.run_tokens(&input_tokens);

        let output_keywords = self
            .dictionary
            .keywords(self.direction.output_vocabulary());
        let output_tokens = scan(&translation.output, output_keywords);

        self.input_lines = super::panes::highlight_tokens(&input_tokens);
        self.output_lines = super::panes::highlight_tokens(&output_tokens);
        self.collision_lines = translation
            .collisions
            .iter()
            .map(|c| c.location.line)
            .collect();
        self.replaced = translation.replaced;
        self.collisions = translation.collisions.len();
        self.output_code = translation.output;
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(TUI_POLL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn total_lines(&self) -> usize {
        self.input_lines.len().max(self.output_lines.len())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Two code panes side by side, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        self.page_height = columns[0].height.saturating_sub(2).max(1) as usize;
        let max_scroll = self.total_lines().saturating_sub(self.page_height);
        self.scroll = self.scroll.min(max_scroll);

        let input_title = format!("Input ({})", self.direction.input_vocabulary());
        let output_title = format!("Output ({})", self.direction.output_vocabulary());
        let no_marks = FxHashSet::default();

        super::panes::render_source_pane(
            frame,
            columns[0],
            &super::panes::SourceRenderData {
                title: &input_title,
                lines: &self.input_lines,
                marked_lines: &self.collision_lines,
                is_output: false,
            },
            self.scroll,
        );

        super::panes::render_source_pane(
            frame,
            columns[1],
            &super::panes::SourceRenderData {
                title: &output_title,
                lines: &self.output_lines,
                marked_lines: &no_marks,
                is_output: true,
            },
            self.scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &super::panes::StatusRenderData {
                message: &self.status_message,
                direction: self.direction,
                replaced: self.replaced,
                collisions: self.collisions,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(self.page_height);
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(self.page_height);
            }
            KeyCode::Home => {
                self.scroll = 0;
            }
            KeyCode::End => {
                // Clamped on the next render
                self.scroll = usize::MAX;
            }
            KeyCode::Char('d') => {
                // Same text, read as the other vocabulary
                self.direction = self.direction.reverse();
                self.refresh();
                self.status_message = format!("Reading input as {}", self.direction.input_vocabulary());
            }
            KeyCode::Char('s') => {
                // Feed the output back in: shows the round trip
                self.source_code = std::mem::take(&mut self.output_code);
                self.direction = self.direction.reverse();
                self.refresh();
                self.status_message = "Swapped input and output".to_string();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::builtin;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_new_converts_source() {
        let app = App::new(builtin(), "int x;\nint pour;\n".to_string(), Direction::ToTarget);
        assert_eq!(app.output_code, "entier x;\nentier pour;\n");
        assert_eq!(app.replaced, 2);
        assert_eq!(app.collisions, 1);
        assert!(app.collision_lines.contains(&2));
        assert_eq!(app.input_lines.len(), 2);
        assert_eq!(app.output_lines.len(), 2);
    }

    #[test]
    fn test_swap_round_trips() {
        let source = "void f(void) { return; }".to_string();
        let mut app = App::new(builtin(), source.clone(), Direction::ToTarget);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.direction, Direction::ToOrigin);
        assert_eq!(app.source_code, "néant f(néant) { retourner; }");
        assert_eq!(app.output_code, source);
    }

    #[test]
    fn test_flip_reads_input_as_other_vocabulary() {
        let mut app = App::new(builtin(), "int x;".to_string(), Direction::ToTarget);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.direction, Direction::ToOrigin);
        // C text read as C🥖: nothing to replace
        assert_eq!(app.output_code, "int x;");
        assert_eq!(app.replaced, 0);
    }

    #[test]
    fn test_scroll_and_quit() {
        let mut app = App::new(builtin(), "a\nb\nc\n".to_string(), Direction::ToTarget);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.scroll, 0);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.scroll, 1);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.scroll, 0);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
