//! Editable byte buffer with an integrated cursor
//!
//! The whole file lives in one contiguous `Vec<u8>`. Positional inserts and
//! deletes are O(n), which is fine for the file sizes a byte editor is used on.
//!
//! Structural operations never move the cursor on their own; callers decide
//! where the cursor goes and then ask the buffer to clamp it. The only cursor
//! invariant the buffer enforces is:
//!
//! - empty buffer: `cursor == 0`
//! - otherwise: `cursor <= len - 1`

use std::ops::Range;

/// A mutable, growable byte sequence plus the cursor that points into it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    /// The bytes being edited
    data: Vec<u8>,

    /// Index of the selected byte
    cursor: usize,

    /// Has the buffer been modified since it was loaded or last saved?
    modified: bool,

    /// Bumped on every mutation
    revision: u64,
}

impl ByteBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `bytes`, cursor on the first byte
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            data: bytes.into(),
            cursor: 0,
            modified: false,
            revision: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Copy of the contents, used when handing the bytes to a save worker
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.clone()
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.data.get(index).copied()
    }

    /// Bytes in `range`, truncated to the end of the buffer
    pub fn slice(&self, range: Range<usize>) -> &[u8] {
        let end = range.end.min(self.data.len());
        let start = range.start.min(end);
        &self.data[start..end]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The byte under the cursor, `None` for an empty buffer
    pub fn current_byte(&self) -> Option<u8> {
        self.get(self.cursor)
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Counter identifying the current contents; changes with every mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Forget pending modifications (after the initial load)
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// Clear the modified flag if nothing changed since `revision` was taken.
    /// Returns whether the flag was cleared.
    pub fn mark_saved_at(&mut self, revision: u64) -> bool {
        if self.revision == revision {
            self.modified = false;
        }
        !self.modified
    }

    fn touch(&mut self) {
        self.modified = true;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Clamp a desired cursor position into the valid range for the current length
    pub fn clamp_cursor(&self, desired: usize) -> usize {
        match self.data.len() {
            0 => 0,
            len => desired.min(len - 1),
        }
    }

    /// Move the cursor to `desired` (clamped). Returns the resulting position.
    pub fn set_cursor(&mut self, desired: usize) -> usize {
        self.cursor = self.clamp_cursor(desired);
        self.cursor
    }

    /// Insert `bytes` immediately before `index`
    ///
    /// Valid for `0 <= index <= len`; larger indices append. Bytes at and after
    /// `index` shift up. Returns the number of bytes inserted.
    pub fn insert_before(&mut self, index: usize, bytes: &[u8]) -> usize {
        if bytes.is_empty() {
            return 0;
        }
        let index = index.min(self.data.len());
        self.data.splice(index..index, bytes.iter().copied());
        self.touch();
        bytes.len()
    }

    /// Insert `bytes` immediately after `index`
    ///
    /// Equivalent to `insert_before(index + 1, bytes)`, so inserting after the
    /// last byte appends.
    pub fn insert_after(&mut self, index: usize, bytes: &[u8]) -> usize {
        self.insert_before(index.saturating_add(1), bytes)
    }

    /// Remove the byte at `index`, returning it
    ///
    /// Returns `None` (and leaves the buffer untouched) when the buffer is
    /// empty or `index` is past the end.
    pub fn delete_at(&mut self, index: usize) -> Option<u8> {
        if index >= self.data.len() {
            return None;
        }
        self.touch();
        Some(self.data.remove(index))
    }

    /// Replace the byte at `index` with `value`, returning the previous byte
    pub fn overwrite_at(&mut self, index: usize, value: u8) -> Option<u8> {
        let slot = self.data.get_mut(index)?;
        let previous = std::mem::replace(slot, value);
        self.touch();
        Some(previous)
    }
}
