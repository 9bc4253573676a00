//! Byte editing: two-digit hex overwrite, delete, and zero-byte insertion

use super::state::EditorState;

impl EditorState {
    /// Feed one hex digit into the byte under the cursor
    ///
    /// The first digit is only remembered. The second one overwrites the byte
    /// and advances the cursor. On an empty buffer there is nothing to
    /// overwrite, so the completed byte is dropped.
    pub fn type_hex_digit(&mut self, digit: u8) {
        let Some(value) = self.nibble.push_digit(digit) else {
            return;
        };

        let cursor = self.cursor();
        match self.buffer.overwrite_at(cursor, value) {
            Some(previous) => {
                tracing::debug!(
                    "Overwrote byte at {:#x}: {:02x} -> {:02x}",
                    cursor,
                    previous,
                    value
                );
                self.buffer.set_cursor(cursor.saturating_add(1));
                self.sync_viewport();
            }
            None => tracing::debug!("Dropped byte {:02x}: buffer is empty", value),
        }
    }

    /// Delete the byte under the cursor; the cursor stays put unless it was on the last byte
    pub fn delete_byte(&mut self) {
        let cursor = self.cursor();
        if let Some(removed) = self.buffer.delete_at(cursor) {
            tracing::debug!("Deleted byte {:02x} at {:#x}", removed, cursor);
        }
        self.after_structural_change(cursor);
    }

    /// Insert a zero byte before the cursor and select it
    pub fn insert_zero_before(&mut self) {
        let cursor = self.cursor();
        self.buffer.insert_before(cursor, &[0x00]);
        tracing::debug!("Inserted zero byte before {:#x}", cursor);
        self.after_structural_change(cursor);
    }

    /// Insert a zero byte after the cursor and select it
    pub fn insert_zero_after(&mut self) {
        let cursor = self.cursor();
        self.buffer.insert_after(cursor, &[0x00]);
        tracing::debug!("Inserted zero byte after {:#x}", cursor);
        self.after_structural_change(cursor.saturating_add(1));
    }
}
