use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

/// Typing two hex digits overwrites the byte and moves on
#[test]
fn test_overwrite_byte_with_two_digits() {
    let mut harness = EditorTestHarness::with_file(80, 24, &[0x11, 0x22, 0x33]).unwrap();

    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    harness.type_text("a").unwrap();

    // Half-typed byte is shown but not yet written
    harness.assert_buffer_bytes(&[0x11, 0x22, 0x33]);
    assert!(harness.get_dump_row(0).starts_with("00000000: 11 a_ 33"));

    harness.type_text("3").unwrap();
    harness.assert_buffer_bytes(&[0x11, 0xa3, 0x33]);
    assert_eq!(harness.cursor_position(), 2);
    assert!(harness.get_dump_row(0).starts_with("00000000: 11 a3 33"));
}

#[test]
fn test_uppercase_digits_are_accepted() {
    let mut harness = EditorTestHarness::with_file(80, 24, &[0x00, 0x00]).unwrap();
    harness.send_key(KeyCode::Char('B'), KeyModifiers::SHIFT).unwrap();
    harness.send_key(KeyCode::Char('E'), KeyModifiers::SHIFT).unwrap();
    harness.assert_buffer_bytes(&[0xbe, 0x00]);
}

/// Typing over a run of bytes edits them one after another
#[test]
fn test_type_run_of_bytes() {
    let mut harness = EditorTestHarness::with_file(80, 24, &[0u8; 4]).unwrap();
    harness.type_text("deadbeef").unwrap();
    harness.assert_buffer_bytes(&[0xde, 0xad, 0xbe, 0xef]);
    // Cursor stays on the last byte
    assert_eq!(harness.cursor_position(), 3);
    assert!(harness.get_dump_row(0).starts_with("00000000: de ad be ef"));
}

#[test]
fn test_non_hex_keys_are_ignored() {
    let mut harness = EditorTestHarness::with_file(80, 24, &[0x11]).unwrap();
    harness.type_text("1").unwrap();
    harness.type_text("xyz").unwrap();
    harness.type_text("2").unwrap();
    harness.assert_buffer_bytes(&[0x12]);
}

#[test]
fn test_insert_before_and_after() {
    let mut harness = EditorTestHarness::with_file(80, 24, &[0x11, 0x22]).unwrap();

    harness.type_text("i").unwrap();
    harness.assert_buffer_bytes(&[0x00, 0x11, 0x22]);
    assert_eq!(harness.cursor_position(), 0);

    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Char('I'), KeyModifiers::SHIFT).unwrap();
    harness.assert_buffer_bytes(&[0x00, 0x11, 0x00, 0x22]);
    assert_eq!(harness.cursor_position(), 2);
}

#[test]
fn test_delete_and_backspace_remove_current_byte() {
    let mut harness = EditorTestHarness::with_file(80, 24, &[0x11, 0x22, 0x33]).unwrap();
    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();

    harness.send_key(KeyCode::Delete, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_bytes(&[0x11, 0x33]);
    assert_eq!(harness.cursor_position(), 1);

    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_bytes(&[0x11]);
    assert_eq!(harness.cursor_position(), 0);

    harness.send_key(KeyCode::Delete, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Delete, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_bytes(&[]);
    assert!(harness.get_status_line().contains("(-)"));
}

/// An empty file can be grown byte by byte
#[test]
fn test_build_file_from_empty() {
    let mut harness = EditorTestHarness::with_file(80, 24, &[]).unwrap();

    // Digits on an empty buffer go nowhere
    harness.type_text("ff").unwrap();
    harness.assert_buffer_bytes(&[]);

    harness.type_text("I").unwrap();
    harness.type_text("4").unwrap();
    harness.type_text("8").unwrap();
    harness.type_text("I69").unwrap();
    harness.assert_buffer_bytes(&[0x48, 0x69]);
    harness.assert_screen_contains("|Hi..............|");
}

#[test]
fn test_modified_marker() {
    let mut harness = EditorTestHarness::with_file(80, 24, &[0x11]).unwrap();
    assert!(!harness.get_status_line().contains("[+]"));

    harness.type_text("i").unwrap();
    assert!(harness.get_status_line().contains("[+]"));
}
