//! End-to-end tests for `lazypalette export`.

use lazypalette::services::Session;
use std::fs;

mod fixtures;
use fixtures::*;

const EXPECTED_CSS: &str = ":root {
  --color-1: #FF0000;
  --color-1-rgb: 255, 0, 0;
  --color-2: #00FF00;
  --color-2-rgb: 0, 255, 0;
  --color-3: #0000FF;
  --color-3-rgb: 0, 0, 255;
  --color-4: #FFFFFF;
  --color-4-rgb: 255, 255, 255;
  --color-5: #000000;
  --color-5-rgb: 0, 0, 0;
}";

const EXPECTED_JSON: &str = r##"[
  {
    "name": "Color 1",
    "hex": "#FF0000",
    "rgb": "rgb(255, 0, 0)",
    "hsl": "hsl(0, 100%, 50%)"
  },
  {
    "name": "Color 2",
    "hex": "#00FF00",
    "rgb": "rgb(0, 255, 0)",
    "hsl": "hsl(120, 100%, 50%)"
  },
  {
    "name": "Color 3",
    "hex": "#0000FF",
    "rgb": "rgb(0, 0, 255)",
    "hsl": "hsl(240, 100%, 50%)"
  },
  {
    "name": "Color 4",
    "hex": "#FFFFFF",
    "rgb": "rgb(255, 255, 255)",
    "hsl": "hsl(0, 0%, 100%)"
  },
  {
    "name": "Color 5",
    "hex": "#000000",
    "rgb": "rgb(0, 0, 0)",
    "hsl": "hsl(0, 0%, 0%)"
  }
]"##;

fn dir_with_favorite() -> tempfile::TempDir {
    let dir = temp_config_dir();
    write_favorites(dir.path(), &[sample_palette("primaries-0001", Some("Primaries"))]);
    dir
}

#[test]
fn test_export_css_from_favorite() {
    let dir = dir_with_favorite();
    let output = run(&["export", "--favorite", "primaries", "--format", "css"], dir.path());
    assert_success(&output);
    assert_eq!(stdout(&output), format!("{EXPECTED_CSS}\n"));
}

#[test]
fn test_export_json_from_favorite() {
    let dir = dir_with_favorite();
    let output = run(&["export", "--favorite", "primaries-0001", "--format", "json"], dir.path());
    assert_success(&output);
    assert_eq!(stdout(&output), format!("{EXPECTED_JSON}\n"));
}

#[test]
fn test_export_defaults_to_configured_format() {
    let dir = dir_with_favorite();
    let output = run(&["export", "--favorite", "prim"], dir.path());
    assert_success(&output);
    assert_eq!(stdout(&output), format!("{EXPECTED_CSS}\n"));

    assert_success(&run(&["config", "set", "--default-format", "json"], dir.path()));
    let output = run(&["export", "--favorite", "prim"], dir.path());
    assert_success(&output);
    assert_eq!(stdout(&output), format!("{EXPECTED_JSON}\n"));
}

#[test]
fn test_export_to_directory_uses_default_file_name() {
    let dir = dir_with_favorite();
    let out_dir = temp_config_dir();

    for (format, file, expected) in [
        ("css", "palette.css", EXPECTED_CSS),
        ("json", "palette.json", EXPECTED_JSON),
    ] {
        let output = run(
            &[
                "export",
                "--favorite",
                "prim",
                "--format",
                format,
                "--output",
                out_dir.path().to_str().unwrap(),
            ],
            dir.path(),
        );
        assert_success(&output);

        let path = out_dir.path().join(file);
        assert!(path.exists(), "Export file should exist at: {}", path.display());
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
        assert!(stdout(&output).contains("Exported"));
    }
}

#[test]
fn test_export_to_file_path() {
    let dir = dir_with_favorite();
    let out_dir = temp_config_dir();
    let out_path = out_dir.path().join("brand.css");

    let output = run(
        &["export", "--favorite", "prim", "--output", out_path.to_str().unwrap()],
        dir.path(),
    );
    assert_success(&output);
    assert_eq!(fs::read_to_string(&out_path).unwrap(), EXPECTED_CSS);
}

#[test]
fn test_export_current_session() {
    let dir = temp_config_dir();
    assert_success(&run(&["generate", "--seed", "3"], dir.path()));
    let session = read_session(dir.path()).unwrap();

    let output = run(&["export", "--format", "css"], dir.path());
    assert_success(&output);
    let text = stdout(&output);
    for (i, color) in session.colors.iter().enumerate() {
        assert!(text.contains(&format!("--color-{}: {};", i + 1, color.hex())));
    }
}

#[test]
fn test_export_without_session_fails() {
    let dir = temp_config_dir();
    let output = run(&["export"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: No palette yet"));
}

#[test]
fn test_export_unknown_favorite_fails() {
    let dir = dir_with_favorite();
    let output = run(&["export", "--favorite", "nope"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No favorite palette with id 'nope'"));
}

#[test]
fn test_export_to_missing_directory_is_io_error() {
    let dir = dir_with_favorite();
    let out_dir = temp_config_dir();
    let out_path = out_dir.path().join("missing").join("palette.css");

    let output = run(
        &["export", "--favorite", "prim", "--output", out_path.to_str().unwrap()],
        dir.path(),
    );
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to write"));
}

#[test]
fn test_export_rejects_tampered_session() {
    let dir = temp_config_dir();
    write_session(dir.path(), &Session::from_palette(&sample_palette("prim", None)));
    let path = dir.path().join("session.json");
    let tampered = fs::read_to_string(&path)
        .unwrap()
        .replacen("\"#FF0000\"", "\"banana\"", 1);
    fs::write(&path, tampered).unwrap();

    let output = run(&["export"], dir.path());
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Failed to parse session file"));
    assert!(err.contains("'banana' is not a hex color"));
    assert!(stdout(&output).is_empty());
}
