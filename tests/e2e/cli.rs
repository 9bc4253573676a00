// Command line handling, exercised through the built binary.
// Only paths that exit before the terminal is taken over are covered here.

use std::process::Command;
use tempfile::TempDir;

fn bewitched() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bewitched"))
}

#[test]
fn test_missing_file_prints_usage() {
    let output = bewitched().output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Usage: bewitched <input file>"
    );
}

#[test]
fn test_version_flag() {
    let output = bewitched().arg("--version").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("bewitched "));
}

#[test]
fn test_invalid_config_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{ "editor": { "bytes_per_line": 0 } }"#).unwrap();
    let input = dir.path().join("input.bin");
    std::fs::write(&input, [0u8; 4]).unwrap();

    let output = bewitched()
        .arg("--config")
        .arg(&config)
        .arg("--log-file")
        .arg(dir.path().join("bewitched.log"))
        .arg(&input)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load config"), "stderr: {stderr}");
    assert!(stderr.contains("bytes_per_line"), "stderr: {stderr}");
}
