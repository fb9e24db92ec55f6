mod common;
use common::temp_path;
use rdaylayout::config::Config;
use rdaylayout::core::bootstrap::{self, InitState};
use rdaylayout::export::OutputFormat;
use std::fs;

#[test]
fn test_missing_file_gives_defaults() {
    let path = temp_path("config_missing", "conf");
    let cfg = Config::load(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.min_display_minutes, 15);
    assert_eq!(cfg.default_format, "table");
}

#[test]
fn test_partial_file_fills_defaults() {
    let path = temp_path("config_partial", "conf");
    fs::write(&path, "skip_invalid: true\n").unwrap();

    let cfg = Config::load(&path).unwrap();
    assert!(cfg.skip_invalid);
    assert_eq!(cfg.pixels_per_hour, 60.0);

    let missing = Config::missing_fields(&path).unwrap();
    assert_eq!(
        missing,
        vec!["min_display_minutes", "pixels_per_hour", "default_format"]
    );
}

#[test]
fn test_init_all_round_trips() {
    let path = temp_path("config_init_all", "conf");
    Config::init_all(&path, false).unwrap();
    assert_eq!(Config::load(&path).unwrap(), Config::default());
    assert!(Config::missing_fields(&path).unwrap().is_empty());
}

#[test]
fn test_init_all_test_mode_writes_nothing() {
    let path = temp_path("config_init_test_mode", "conf");
    Config::init_all(&path, true).unwrap();
    assert!(!path.exists());
}

#[test]
fn test_invalid_values_are_rejected() {
    let path = temp_path("config_invalid", "conf");
    fs::write(&path, "min_display_minutes: 2000\n").unwrap();
    assert!(Config::load(&path).is_err());

    fs::write(&path, "pixels_per_hour: .inf\n").unwrap();
    assert!(Config::load(&path).is_err());

    fs::write(&path, "pixels_per_hour: [1, 2]\n").unwrap();
    assert!(Config::load(&path).is_err());
}

#[test]
fn test_default_format_parsing() {
    assert_eq!(OutputFormat::from_config("JSON").unwrap(), OutputFormat::Json);
    assert_eq!(OutputFormat::from_config("csv").unwrap().as_str(), "csv");
    assert!(OutputFormat::from_config("pdf").is_err());
}

#[test]
fn test_resolve_path_expands_tilde() {
    let p = Config::resolve_path(Some("~/custom.conf"));
    assert!(p.is_absolute() || dirs::home_dir().is_none());
    assert!(p.ends_with("custom.conf"));
    assert_eq!(Config::resolve_path(None), Config::config_file());
}

#[test]
fn test_bootstrap_runs_once() {
    assert_eq!(bootstrap::init(0), InitState::Ready);
    assert_eq!(bootstrap::state(), InitState::Ready);
    // Second call is a no-op
    assert_eq!(bootstrap::init(3), InitState::Ready);
}
