//! Hex/ASCII dump rendering
//!
//! Each row renders as
//! `00000010: 48 65 6c 6c  6f 2c 20 77  6f 72 6c 64  21 0a 00 00  |Hello, world!...|`
//! Short rows are padded so the ASCII column always lines up.

use crate::app::state::EditorState;
use crate::config::EditorConfig;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::iter;

/// Width of the `00000000: ` label
const OFFSET_LABEL_WIDTH: usize = 10;

/// Column geometry of one dump row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexLayout {
    pub bytes_per_line: usize,
    pub group_size: usize,
}

impl Default for HexLayout {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl HexLayout {
    pub fn new(bytes_per_line: usize, group_size: usize) -> Self {
        Self {
            bytes_per_line: bytes_per_line.max(1),
            group_size: group_size.max(1),
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.bytes_per_line, config.group_size)
    }

    /// Three cells per byte plus one extra space per complete group
    pub fn hex_column_width(&self) -> usize {
        self.bytes_per_line * 3 + self.bytes_per_line / self.group_size
    }

    /// Total width of a rendered row, including the `|ascii|` column
    pub fn row_width(&self) -> usize {
        OFFSET_LABEL_WIDTH + self.hex_column_width() + self.bytes_per_line + 2
    }

    fn spacing_after(&self, index_in_row: usize) -> &'static str {
        if (index_in_row + 1) % self.group_size == 0 {
            "  "
        } else {
            " "
        }
    }
}

/// Printable ASCII shows as itself, everything else as `.`
pub fn printable(byte: u8) -> char {
    if (0x20..0x7f).contains(&byte) {
        byte as char
    } else {
        '.'
    }
}

/// The cursor's position within one row, plus any half-typed byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCursor {
    pub index: usize,
    pub pending: Option<u8>,
}

/// Renders the dump window
pub struct HexViewRenderer;

impl HexViewRenderer {
    /// Build one dump row starting at buffer index `start`
    pub fn row_line(
        layout: &HexLayout,
        start: usize,
        bytes: &[u8],
        cursor: Option<RowCursor>,
    ) -> Line<'static> {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let reversed = Style::default().add_modifier(Modifier::REVERSED);

        let mut spans = Vec::with_capacity(bytes.len() * 2 + 3);
        spans.push(Span::styled(format!("{start:08x}: "), bold));

        let mut hex_width = 0;
        for (i, byte) in bytes.iter().enumerate() {
            let cell = match cursor {
                Some(c) if c.index == i => {
                    let text = match c.pending {
                        Some(high) => format!("{high:x}_"),
                        None => format!("{byte:02x}"),
                    };
                    Span::styled(text, reversed)
                }
                _ => Span::raw(format!("{byte:02x}")),
            };
            let spacing = layout.spacing_after(i);
            hex_width += 2 + spacing.len();
            spans.push(cell);
            spans.push(Span::raw(spacing));
        }

        let padding = layout.hex_column_width().saturating_sub(hex_width);
        if padding > 0 {
            spans.push(Span::raw(" ".repeat(padding)));
        }

        let ascii: String = bytes
            .iter()
            .map(|&b| printable(b))
            .chain(iter::repeat('.'))
            .take(layout.bytes_per_line)
            .collect();
        spans.push(Span::raw(format!("|{ascii}|")));

        Line::from(spans)
    }

    /// Lines for every visible row of the window
    ///
    /// `layout.bytes_per_line` must match the viewport's.
    pub fn lines(state: &EditorState, layout: &HexLayout) -> Vec<Line<'static>> {
        let viewport = &state.viewport;
        let cursor = state.cursor();
        let cursor_row = viewport.screen_row(cursor);

        (0..viewport.visible_line_count())
            .map(|row| {
                let start = viewport.line_start(row);
                let bytes = state.buffer.slice(start..start + layout.bytes_per_line);
                let row_cursor = (cursor_row == Some(row) && cursor < start + bytes.len())
                    .then(|| RowCursor {
                        index: cursor - start,
                        pending: state.nibble.pending(),
                    });
                Self::row_line(layout, start, bytes, row_cursor)
            })
            .collect()
    }

    pub fn render(frame: &mut Frame, area: Rect, state: &EditorState, layout: &HexLayout) {
        frame.render_widget(Paragraph::new(Self::lines(state, layout)), area);
    }
}
