//! Save path prompt
//!
//! Renders as: `Filepath: some/path/to/file.bin`
//! with the terminal cursor placed at the edit position.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::path::PathBuf;

/// Single-line text field holding the destination path of a save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePrompt {
    /// Current text value
    pub value: String,
    /// Cursor position (byte index into `value`, always on a char boundary)
    pub cursor: usize,
    /// Label displayed before the input
    pub label: String,
}

impl Default for SavePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl SavePrompt {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            label: "Filepath: ".to_string(),
        }
    }

    /// Set the initial value with the cursor at the end
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Replace the text and put the cursor at the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    /// The entered path, or `None` when the field is blank
    pub fn path(&self) -> Option<PathBuf> {
        let trimmed = self.value.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }

    /// Insert a character at the cursor position
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.prev_boundary();
        self.value.remove(prev);
        self.cursor = prev;
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Column of the edit cursor relative to the start of the label
    pub fn cursor_column(&self) -> usize {
        self.label.chars().count() + self.value[..self.cursor].chars().count()
    }

    /// Draw the prompt on one row and place the terminal cursor in it
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let line = Line::from(vec![
            Span::styled(
                self.label.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.value.clone()),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        let column = (self.cursor_column() as u16).min(area.width.saturating_sub(1));
        frame.set_cursor_position((area.x + column, area.y));
    }
}
