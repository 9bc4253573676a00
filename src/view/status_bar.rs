//! Status line and separator rules

use crate::app::state::EditorState;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Renders the status line below the dump
pub struct StatusBarRenderer;

impl StatusBarRenderer {
    /// ` Offset [0000002a] (65) [?] Help [+]  Wrote 3 bytes to out.bin`
    pub fn status_line(state: &EditorState) -> Line<'static> {
        let bold = Style::default().add_modifier(Modifier::BOLD);

        let value = state
            .buffer
            .current_byte()
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string());

        let mut spans = vec![
            Span::raw(" Offset ["),
            Span::styled(format!("{:08x}", state.cursor()), bold),
            Span::raw("]"),
            Span::styled(format!(" ({value})"), bold),
            Span::raw(" ["),
            Span::styled("?", bold),
            Span::raw("] Help"),
        ];

        if state.buffer.is_modified() {
            spans.push(Span::styled(" [+]", bold));
        }

        if let Some(message) = state.status_message() {
            spans.push(Span::raw(format!("  {message}")));
        }

        Line::from(spans)
    }

    pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &EditorState) {
        frame.render_widget(Paragraph::new(Self::status_line(state)), area);
    }

    /// A row of `-` across `width` columns
    pub fn render_rule(frame: &mut Frame, area: Rect, width: usize) {
        frame.render_widget(Paragraph::new("-".repeat(width)), area);
    }
}
