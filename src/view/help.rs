//! Help screen listing the key bindings

use crate::input::keybindings::KeybindingResolver;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use ratatui::Frame;

pub const HELP_TITLE: &str = "Bewitched :: Help";

pub struct HelpRenderer;

impl HelpRenderer {
    /// One line per binding, key column padded to the widest key
    pub fn lines() -> Vec<Line<'static>> {
        let entries = KeybindingResolver::help_entries();
        let key_width = entries
            .iter()
            .map(|(key, _)| key.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines = vec![Line::default()];
        lines.extend(entries.into_iter().map(|(key, description)| {
            Line::from(vec![
                Span::styled(
                    format!("{key:<key_width$}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" {description}")),
            ])
        }));
        lines
    }

    pub fn render(frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title(
                Line::from(Span::styled(
                    HELP_TITLE,
                    Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ))
                .alignment(Alignment::Center),
            )
            .padding(Padding::horizontal(1));

        frame.render_widget(Paragraph::new(Self::lines()).block(block), area);
    }
}
