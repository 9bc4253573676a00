use crate::common::harness::{layout, EditorTestHarness};
use bewitched::config::Config;

/// Full screen for a short file with the default layout
#[test]
fn test_default_screen_layout() {
    let harness = EditorTestHarness::with_file(80, 24, b"Hello, world!\n").unwrap();

    assert_eq!(
        harness.get_dump_row(0),
        "00000000: 48 65 6c 6c  6f 2c 20 77  6f 72 6c 64  21 0a        |Hello, world!...|"
    );
    assert!(harness.get_dump_row(1).starts_with("00000010: "));
    assert!(harness.get_dump_row(19).starts_with("00000130: "));

    assert_eq!(harness.get_row_text(layout::top_rule_row(20) as u16), "-".repeat(80));
    assert_eq!(
        harness.get_status_line(),
        " Offset [00000000] (72) [?] Help"
    );
    assert_eq!(
        harness.get_row_text(layout::bottom_rule_row(20) as u16),
        "-".repeat(80)
    );
}

#[test]
fn test_custom_geometry() {
    let mut config = Config::default();
    config.editor.bytes_per_line = 8;
    config.editor.group_size = 2;
    config.editor.visible_lines = 2;
    let harness =
        EditorTestHarness::with_config(60, 8, &(0x41..0x51).collect::<Vec<u8>>(), config)
            .unwrap();

    assert_eq!(
        harness.get_dump_row(0),
        "00000000: 41 42  43 44  45 46  47 48  |ABCDEFGH|"
    );
    assert_eq!(
        harness.get_dump_row(1),
        "00000008: 49 4a  4b 4c  4d 4e  4f 50  |IJKLMNOP|"
    );
    assert_eq!(harness.get_row_text(layout::top_rule_row(2) as u16).trim_end(), "-".repeat(48));
}
