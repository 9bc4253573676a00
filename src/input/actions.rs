//! High-level actions the editor understands
//!
//! Key events are resolved into actions by the keybinding resolver; I/O
//! completions are turned into actions by the editor's async message pump.
//! Everything that changes editor state goes through one of these.

use std::path::PathBuf;

/// Outcome of a save: bytes written, or a human readable reason for failure
pub type SaveResult = Result<usize, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MovePageUp,
    MovePageDown,

    // Editing
    /// A hexadecimal digit, already converted to its value (0..=15)
    HexDigit(u8),
    DeleteByte,
    InsertBefore,
    InsertAfter,

    // Mode switches
    OpenSaveDialog,
    ShowHelp,
    /// Leave the current dialog; a no-op while editing
    Escape,

    // Save prompt
    ConfirmSave,
    PromptInsertChar(char),
    PromptBackspace,
    PromptDelete,
    PromptLeft,
    PromptRight,
    PromptHome,
    PromptEnd,

    // I/O completions
    /// Contents of the input file, delivered once after the initial load
    FileLoaded(Vec<u8>),
    /// A save finished; `revision` is the buffer revision that was written
    SaveCompleted {
        path: PathBuf,
        revision: u64,
        result: SaveResult,
    },

    Quit,

    // No-op
    None,
}

impl Action {
    /// Actions that edit the save prompt's text field
    pub fn is_prompt_edit(&self) -> bool {
        matches!(
            self,
            Action::PromptInsertChar(_)
                | Action::PromptBackspace
                | Action::PromptDelete
                | Action::PromptLeft
                | Action::PromptRight
                | Action::PromptHome
                | Action::PromptEnd
        )
    }

    /// Short description used on the help screen
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveLeft | Action::MoveRight | Action::MoveUp | Action::MoveDown => {
                "Move the cursor"
            }
            Action::MovePageUp | Action::MovePageDown => "Move the cursor a page up/down",
            Action::HexDigit(_) => "Edit the currently selected byte",
            Action::DeleteByte => "Delete the currently selected byte",
            Action::InsertBefore => "Insert a zero byte before the cursor",
            Action::InsertAfter => "Insert a zero byte after the cursor",
            Action::OpenSaveDialog => "Save this file",
            Action::ShowHelp => "Show this help menu",
            Action::Escape => "Exit any menu",
            Action::Quit => "Quit",
            _ => "",
        }
    }
}
