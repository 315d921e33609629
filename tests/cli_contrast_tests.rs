//! End-to-end tests for `lazypalette contrast`.

use serde_json::Value;

mod fixtures;
use fixtures::*;

fn contrast_json(hex: &str) -> Value {
    let dir = temp_config_dir();
    let output = run(&["contrast", hex, "--json"], dir.path());
    assert_success(&output);
    serde_json::from_str(&stdout(&output)).expect("Should parse JSON output")
}

#[test]
fn test_contrast_extremes() {
    let white = contrast_json("#FFFFFF");
    assert_eq!(white["text"], "black");
    assert_eq!(white["luminance"], 1.0);

    let black = contrast_json("#000000");
    assert_eq!(black["text"], "white");
    assert_eq!(black["luminance"], 0.0);
}

#[test]
fn test_contrast_normalizes_hex() {
    let result = contrast_json("ff0000");
    assert_eq!(result["hex"], "#FF0000");
    assert_eq!(result["text"], "black");
}

#[test]
fn test_contrast_human_output() {
    let dir = temp_config_dir();
    let output = run(&["contrast", "#0000FF"], dir.path());
    assert_success(&output);
    assert_eq!(stdout(&output), "#0000FF  luminance 0.0722  text: white\n");
}

#[test]
fn test_contrast_rejects_malformed_hex() {
    let dir = temp_config_dir();
    for hex in ["#FFF", "#GGGGGG", "blue"] {
        let output = run(&["contrast", hex], dir.path());
        assert_eq!(output.status.code(), Some(1), "{hex} should be rejected");
        assert!(stderr(&output).contains("Error: Invalid color"));
    }
}
