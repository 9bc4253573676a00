//! Two-phase hexadecimal byte entry
//!
//! The first hex digit typed is remembered as the high nibble; the second one
//! completes the byte. Nothing is written to the buffer until both digits are in.

/// Pending high nibble of the byte currently being typed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NibbleEntry {
    pending: Option<u8>,
}

impl NibbleEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The high nibble waiting for its low half, if any
    pub fn pending(&self) -> Option<u8> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Feed one hex digit (0..=15)
    ///
    /// Returns the completed byte when `digit` is the second half, otherwise
    /// stores it as the high nibble and returns `None`.
    pub fn push_digit(&mut self, digit: u8) -> Option<u8> {
        debug_assert!(digit < 16, "nibble out of range: {digit}");
        let digit = digit & 0x0f;
        match self.pending.take() {
            Some(high) => Some((high << 4) | digit),
            None => {
                self.pending = Some(digit);
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

/// Value of a hexadecimal digit character, accepting both cases
pub fn hex_digit_value(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}
