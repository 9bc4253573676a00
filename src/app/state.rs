//! Editor state and the action reducer
//!
//! `EditorState` holds everything that changes while bytes are being edited:
//! the buffer and its cursor, the viewport, the pending nibble, the current
//! mode, and the latest status message. `dispatch` is the single entry point
//! for state changes. Each call consumes one action and leaves the state
//! consistent (cursor clamped, viewport recomputed) before returning, so the
//! state machine can be driven directly in tests without a terminal.

use super::types::ApplicationMode;
use crate::config::EditorConfig;
use crate::input::actions::{Action, SaveResult};
use crate::model::buffer::ByteBuffer;
use crate::model::nibble::NibbleEntry;
use crate::view::viewport::Viewport;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct EditorState {
    /// The bytes being edited, with the cursor
    pub buffer: ByteBuffer,

    /// Which part of the dump is on screen
    pub viewport: Viewport,

    /// High nibble typed so far for the byte under the cursor
    pub nibble: NibbleEntry,

    mode: ApplicationMode,

    /// Latest message for the status line
    status_message: Option<String>,
}

impl EditorState {
    /// Create an empty editing state for a window of `lines_visible` rows
    /// of `bytes_per_line` bytes
    pub fn new(lines_visible: usize, bytes_per_line: usize) -> Self {
        Self {
            buffer: ByteBuffer::new(),
            viewport: Viewport::new(lines_visible, bytes_per_line),
            nibble: NibbleEntry::new(),
            mode: ApplicationMode::Editing,
            status_message: None,
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.visible_lines, config.bytes_per_line)
    }

    pub fn mode(&self) -> ApplicationMode {
        self.mode
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// Byte index of the first byte on screen
    pub fn offset(&self) -> usize {
        self.viewport.offset
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: String) {
        tracing::info!("{}", message);
        self.status_message = Some(message);
    }

    /// Apply one action
    ///
    /// Cursor, edit, and mode-entry actions only take effect in
    /// [`ApplicationMode::Editing`]; everything else that reaches the state in
    /// another mode is ignored. Prompt and quit actions belong to the editor
    /// shell and are ignored here.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::FileLoaded(bytes) => self.load_bytes(&bytes),
            Action::SaveCompleted {
                path,
                revision,
                result,
            } => self.finish_save(&path, revision, result),
            Action::Escape => self.escape(),
            action if self.mode != ApplicationMode::Editing => {
                tracing::trace!("Ignoring {:?} in {:?} mode", action, self.mode);
            }
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::MovePageUp => self.move_page_up(),
            Action::MovePageDown => self.move_page_down(),
            Action::HexDigit(digit) => self.type_hex_digit(digit),
            Action::DeleteByte => self.delete_byte(),
            Action::InsertBefore => self.insert_zero_before(),
            Action::InsertAfter => self.insert_zero_after(),
            Action::OpenSaveDialog => self.set_mode(ApplicationMode::SaveDialog),
            Action::ShowHelp => self.set_mode(ApplicationMode::HelpVisible),
            _ => {}
        }
    }

    fn set_mode(&mut self, mode: ApplicationMode) {
        self.nibble.clear();
        if self.mode != mode {
            tracing::debug!("Mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Esc leaves help and the save dialog; while editing it does nothing
    fn escape(&mut self) {
        match self.mode {
            ApplicationMode::Editing => {}
            ApplicationMode::HelpVisible | ApplicationMode::SaveDialog => {
                self.set_mode(ApplicationMode::Editing)
            }
        }
    }

    /// Bulk insert of the freshly loaded file at the cursor
    fn load_bytes(&mut self, bytes: &[u8]) {
        let cursor = self.buffer.cursor();
        let inserted = self.buffer.insert_before(cursor, bytes);
        self.buffer.mark_saved();
        tracing::debug!("Loaded {} bytes into buffer", inserted);
        self.after_structural_change(cursor);
    }

    /// A save finished. Success and failure both return to editing; failure
    /// is reported on the status line instead of being dropped.
    fn finish_save(&mut self, path: &Path, revision: u64, result: SaveResult) {
        match result {
            Ok(written) => {
                self.buffer.mark_saved_at(revision);
                self.set_status_message(format!(
                    "Wrote {} bytes to {}",
                    written,
                    path.display()
                ));
            }
            Err(reason) => {
                tracing::error!("Failed to save {}: {}", path.display(), reason);
                self.status_message = Some(format!("Save failed: {reason}"));
            }
        }
        if self.mode == ApplicationMode::SaveDialog {
            self.set_mode(ApplicationMode::Editing);
        }
    }

    /// Re-clamp the cursor after the buffer changed shape and bring it on screen
    pub(crate) fn after_structural_change(&mut self, desired_cursor: usize) {
        self.nibble.clear();
        self.buffer.set_cursor(desired_cursor);
        self.sync_viewport();
    }

    pub(crate) fn sync_viewport(&mut self) {
        self.viewport.ensure_visible(self.buffer.cursor());
    }
}
