use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let mut cli = CliArgs::parse_from(["foodpanel", "--exit-on-select", "false", "--show-logs"]);
	cli.theme = Some("light".into());
	cli.labels = Some(PathBuf::from("labels.toml"));
	cli.fixture = Some(PathBuf::from("results.json"));
	cli.search_delay_ms = Some(300);
	cli.log_level = Some("debug".into());

	let mut config = RawConfig::default();
	config.ui.theme = Some("solarized".into());
	config.feed.search_delay_ms = Some(10);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.ui.theme, cli.theme);
	assert_eq!(config.ui.labels, cli.labels);
	assert_eq!(config.ui.exit_on_select, Some(false));
	assert_eq!(config.ui.show_logs, Some(true));
	assert_eq!(config.feed.fixture, cli.fixture);
	assert_eq!(config.feed.search_delay_ms, Some(300));
	assert_eq!(config.log.level, cli.log_level);
}

#[test]
fn absent_flags_keep_file_values() {
	let cli = CliArgs::parse_from(["foodpanel"]);
	let mut config = RawConfig::default();
	config.ui.theme = Some("solarized".into());
	config.ui.exit_on_select = Some(false);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.ui.theme.as_deref(), Some("solarized"));
	assert_eq!(config.ui.exit_on_select, Some(false));
	assert_eq!(config.ui.show_logs, None);
}

#[test]
fn resolve_fills_defaults() {
	let cli = CliArgs::parse_from(["foodpanel"]);
	let resolved = RawConfig::default().resolve(&cli).expect("resolves");

	assert_eq!(resolved.theme, "slate");
	assert!(resolved.exit_on_select);
	assert!(!resolved.show_logs);
	assert_eq!(resolved.search_delay, Duration::ZERO);
	assert_eq!(resolved.log_level, "info");
	assert!(resolved.fixture.is_none());
}

#[test]
fn resolve_rejects_unknown_theme_from_flag() {
	let cli = CliArgs::parse_from(["foodpanel", "--theme", "neon"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("ui.theme"));
	assert!(message.contains("CLI flag `--theme`"));
	assert!(message.contains("value: neon"));
}

#[test]
fn resolve_rejects_missing_fixture_from_config_key() {
	let cli = CliArgs::parse_from(["foodpanel"]);
	let mut config = RawConfig::default();
	config.feed.fixture = Some(PathBuf::from("/no/such/fixture.json"));

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("configuration key `feed.fixture`"));
}

#[test]
fn resolve_accepts_existing_fixture() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("results.json");
	fs::write(&path, "[]").expect("write fixture");

	let cli = CliArgs::parse_from(["foodpanel"]);
	let mut config = RawConfig::default();
	config.feed.fixture = Some(path.clone());

	let resolved = config.resolve(&cli).expect("resolves");
	assert_eq!(resolved.fixture, Some(path));
}
