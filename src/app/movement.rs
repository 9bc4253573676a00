//! Cursor navigation
//!
//! Every move is a delta from the current cursor, clamped to the buffer.
//! Moving past either end is absorbed by the clamp rather than reported.

use super::state::EditorState;

impl EditorState {
    pub fn move_left(&mut self) {
        let target = self.cursor().saturating_sub(1);
        self.move_cursor_to(target);
    }

    pub fn move_right(&mut self) {
        let target = self.cursor().saturating_add(1);
        self.move_cursor_to(target);
    }

    /// One row up; from the first row this snaps to byte 0
    pub fn move_up(&mut self) {
        let target = self.cursor().saturating_sub(self.viewport.bytes_per_line());
        self.move_cursor_to(target);
    }

    /// One row down; from the last row this snaps to the last byte
    pub fn move_down(&mut self) {
        let target = self.cursor().saturating_add(self.viewport.bytes_per_line());
        self.move_cursor_to(target);
    }

    pub fn move_page_up(&mut self) {
        let target = self.cursor().saturating_sub(self.viewport.page_size());
        self.move_cursor_to(target);
    }

    pub fn move_page_down(&mut self) {
        let target = self.cursor().saturating_add(self.viewport.page_size());
        self.move_cursor_to(target);
    }

    /// Clamp and set the cursor, drop any half-typed byte, and scroll to it
    fn move_cursor_to(&mut self, target: usize) {
        self.nibble.clear();
        self.buffer.set_cursor(target);
        self.sync_viewport();
    }
}
