//! Core data model: the byte buffer and the nibble-entry state

pub mod buffer;
pub mod nibble;
