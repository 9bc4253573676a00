use super::*;
use crate::view::help::HelpRenderer;
use crate::view::hex_view::HexViewRenderer;
use crate::view::status_bar::StatusBarRenderer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

/// Rows the help panel takes at most
const HELP_HEIGHT: u16 = 25;

impl Editor {
    /// Render the editor to the terminal
    ///
    /// Layout, top to bottom: the dump, a rule, the status line (or the save
    /// prompt), another rule. Help replaces all of it.
    pub fn render(&self, frame: &mut Frame) {
        let _span = tracing::trace_span!("render").entered();
        let size = frame.area();
        let width = self.layout.row_width();

        if self.state.mode() == ApplicationMode::HelpVisible {
            let area = Rect {
                width: size.width.min(width as u16),
                height: size.height.min(HELP_HEIGHT),
                ..size
            };
            HelpRenderer::render(frame, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.state.viewport.visible_line_count() as u16), // Dump
                Constraint::Length(1), // Rule
                Constraint::Length(1), // Status line or prompt
                Constraint::Length(1), // Rule
                Constraint::Min(0),
            ])
            .split(size);

        HexViewRenderer::render(frame, chunks[0], &self.state, &self.layout);
        StatusBarRenderer::render_rule(frame, chunks[1], width);
        match self.state.mode() {
            ApplicationMode::SaveDialog => self.prompt.render(frame, chunks[2]),
            _ => StatusBarRenderer::render_status_bar(frame, chunks[2], &self.state),
        }
        StatusBarRenderer::render_rule(frame, chunks[3], width);
    }
}
