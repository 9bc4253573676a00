use crate::input::actions::Action;
use crate::model::nibble::hex_digit_value;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Format a keybinding as a user-friendly string
pub fn format_keybinding(keycode: &KeyCode, modifiers: &KeyModifiers) -> String {
    let mut result = String::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        result.push_str("Ctrl+");
    }
    if modifiers.contains(KeyModifiers::ALT) {
        result.push_str("Alt+");
    }

    match keycode {
        KeyCode::Enter => result.push_str("Enter"),
        KeyCode::Backspace => result.push_str("Backspace"),
        KeyCode::Delete => result.push_str("Del"),
        KeyCode::Esc => result.push_str("Esc"),
        KeyCode::Left => result.push('←'),
        KeyCode::Right => result.push('→'),
        KeyCode::Up => result.push('↑'),
        KeyCode::Down => result.push('↓'),
        KeyCode::Home => result.push_str("Home"),
        KeyCode::End => result.push_str("End"),
        KeyCode::PageUp => result.push_str("PgUp"),
        KeyCode::PageDown => result.push_str("PgDn"),
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::CONTROL) => {
            result.push(c.to_ascii_uppercase())
        }
        KeyCode::Char(c) => result.push(*c),
        _ => return String::new(),
    }

    result
}

/// Context in which a key binding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyContext {
    /// Bindings that work in every context (checked first)
    Global,
    /// Navigating and editing the byte buffer
    Editing,
    /// Help screen is shown
    Help,
    /// Save dialog has focus
    SaveDialog,
}

impl KeyContext {
    /// Check if a context passes typed characters through as text
    pub fn allows_text_input(&self) -> bool {
        matches!(self, KeyContext::SaveDialog)
    }
}

/// Resolves key events to actions for the current context
#[derive(Debug, Clone)]
pub struct KeybindingResolver {
    bindings: HashMap<KeyContext, HashMap<(KeyCode, KeyModifiers), Action>>,
}

impl Default for KeybindingResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingResolver {
    /// Create a resolver with the built-in key map
    pub fn new() -> Self {
        let mut resolver = Self {
            bindings: HashMap::new(),
        };

        use KeyContext::*;
        let none = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;

        resolver.bind(Global, KeyCode::Char('c'), ctrl, Action::Quit);
        resolver.bind(Global, KeyCode::Char('q'), ctrl, Action::Quit);

        resolver.bind(Editing, KeyCode::Left, none, Action::MoveLeft);
        resolver.bind(Editing, KeyCode::Right, none, Action::MoveRight);
        resolver.bind(Editing, KeyCode::Up, none, Action::MoveUp);
        resolver.bind(Editing, KeyCode::Down, none, Action::MoveDown);
        resolver.bind(Editing, KeyCode::PageUp, none, Action::MovePageUp);
        resolver.bind(Editing, KeyCode::PageDown, none, Action::MovePageDown);
        resolver.bind(Editing, KeyCode::Delete, none, Action::DeleteByte);
        resolver.bind(Editing, KeyCode::Backspace, none, Action::DeleteByte);
        resolver.bind(Editing, KeyCode::Char('i'), none, Action::InsertBefore);
        resolver.bind(Editing, KeyCode::Char('I'), none, Action::InsertAfter);
        resolver.bind(Editing, KeyCode::Char('s'), ctrl, Action::OpenSaveDialog);
        resolver.bind(Editing, KeyCode::Char('?'), none, Action::ShowHelp);
        resolver.bind(Editing, KeyCode::Esc, none, Action::Escape);

        resolver.bind(Help, KeyCode::Esc, none, Action::Escape);

        resolver.bind(SaveDialog, KeyCode::Esc, none, Action::Escape);
        resolver.bind(SaveDialog, KeyCode::Enter, none, Action::ConfirmSave);
        resolver.bind(SaveDialog, KeyCode::Backspace, none, Action::PromptBackspace);
        resolver.bind(SaveDialog, KeyCode::Delete, none, Action::PromptDelete);
        resolver.bind(SaveDialog, KeyCode::Left, none, Action::PromptLeft);
        resolver.bind(SaveDialog, KeyCode::Right, none, Action::PromptRight);
        resolver.bind(SaveDialog, KeyCode::Home, none, Action::PromptHome);
        resolver.bind(SaveDialog, KeyCode::End, none, Action::PromptEnd);

        resolver
    }

    fn bind(
        &mut self,
        context: KeyContext,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Action,
    ) {
        self.bindings
            .entry(context)
            .or_default()
            .insert((code, modifiers), action);
    }

    /// Terminals disagree on whether shifted characters carry SHIFT
    /// ('I' may arrive as `Char('I')` with or without it), so drop it for chars.
    fn normalize(event: &KeyEvent) -> (KeyCode, KeyModifiers) {
        match event.code {
            KeyCode::Char(_) => (event.code, event.modifiers.difference(KeyModifiers::SHIFT)),
            code => (code, event.modifiers),
        }
    }

    /// Resolve a key event to an action in the given context
    pub fn resolve(&self, event: &KeyEvent, context: KeyContext) -> Action {
        let key = Self::normalize(event);
        tracing::trace!(
            "KeybindingResolver.resolve: code={:?}, modifiers={:?}, context={:?}",
            key.0,
            key.1,
            context
        );

        for ctx in [KeyContext::Global, context] {
            if let Some(action) = self.bindings.get(&ctx).and_then(|b| b.get(&key)) {
                tracing::trace!("  -> Found in {:?} bindings: {:?}", ctx, action);
                return action.clone();
            }
        }

        // Plain characters that are not bound to a command
        if let (KeyCode::Char(c), modifiers) = key {
            if modifiers.is_empty() {
                match context {
                    KeyContext::Editing => {
                        if let Some(value) = hex_digit_value(c) {
                            return Action::HexDigit(value);
                        }
                    }
                    ctx if ctx.allows_text_input() => return Action::PromptInsertChar(c),
                    _ => {}
                }
            }
        }

        tracing::trace!("  -> No binding found, returning Action::None");
        Action::None
    }

    /// Rows for the help screen: key label and what it does
    pub fn help_entries() -> Vec<(String, &'static str)> {
        let none = KeyModifiers::NONE;
        let arrows: String = [KeyCode::Left, KeyCode::Up, KeyCode::Down, KeyCode::Right]
            .iter()
            .map(|code| format_keybinding(code, &none))
            .collect();
        let pages = format!(
            "{}/{}",
            format_keybinding(&KeyCode::PageUp, &none),
            format_keybinding(&KeyCode::PageDown, &none)
        );
        let delete = format!(
            "{}/{}",
            format_keybinding(&KeyCode::Delete, &none),
            format_keybinding(&KeyCode::Backspace, &none)
        );

        vec![
            (arrows, Action::MoveLeft.description()),
            (pages, Action::MovePageDown.description()),
            ("[a-f0-9]".to_string(), Action::HexDigit(0).description()),
            (delete, Action::DeleteByte.description()),
            ("i".to_string(), Action::InsertBefore.description()),
            ("I".to_string(), Action::InsertAfter.description()),
            (
                format_keybinding(&KeyCode::Char('s'), &KeyModifiers::CONTROL),
                Action::OpenSaveDialog.description(),
            ),
            (
                format_keybinding(&KeyCode::Esc, &none),
                Action::Escape.description(),
            ),
            ("?".to_string(), Action::ShowHelp.description()),
            (
                format_keybinding(&KeyCode::Char('q'), &KeyModifiers::CONTROL),
                Action::Quit.description(),
            ),
        ]
    }
}
