use std::path::Path;

use foodpanel::logging;
use foodpanel::ui::theme;

use super::{ConfigError, ResolvedConfig};

pub(super) fn validate(config: &ResolvedConfig) -> Result<(), ConfigError> {
	let sources = &config.sources;

	if theme::by_name(&config.theme).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme; expected one of {}", theme::names().join(", ")),
		));
	}

	if logging::parse_level(&config.log_level).is_none() {
		return Err(ConfigError::invalid(
			"log.level",
			config.log_level.clone(),
			sources.source_for_log_level(),
			"expected off, error, warn, info, debug or trace",
		));
	}

	if let Some(path) = &config.labels
		&& !path.is_file()
	{
		return Err(missing_file("ui.labels", path, sources.source_for_labels()));
	}

	if let Some(path) = &config.fixture
		&& !path.is_file()
	{
		return Err(missing_file("feed.fixture", path, sources.source_for_fixture()));
	}

	Ok(())
}

fn missing_file(key: &'static str, path: &Path, origin: super::SettingSource) -> ConfigError {
	ConfigError::invalid(key, path.display().to_string(), origin, "file does not exist")
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use super::super::{ConfigSources, SettingSource};
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			theme: "slate".into(),
			labels: None,
			exit_on_select: true,
			show_logs: false,
			fixture: None,
			search_delay: Duration::ZERO,
			log_level: "info".into(),
			sources: ConfigSources::default(),
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config()).is_ok());
	}

	#[test]
	fn theme_aliases_are_accepted() {
		let config = ResolvedConfig {
			theme: "Solarized-Dark".into(),
			..config()
		};
		assert!(validate(&config).is_ok());
	}

	#[test]
	fn validation_rejects_unknown_log_level() {
		let config = ResolvedConfig {
			log_level: "chatty".into(),
			sources: ConfigSources {
				log_level: Some(SettingSource::Environment("FOODPANEL__LOG__LEVEL")),
				..ConfigSources::default()
			},
			..config()
		};

		let err = validate(&config).unwrap_err();
		assert_eq!(err.key, "log.level");
		let message = err.to_string();
		assert!(message.contains("value: chatty"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_rejects_missing_catalog() {
		let config = ResolvedConfig {
			labels: Some(PathBuf::from("/no/such/labels.toml")),
			sources: ConfigSources {
				labels: Some(SettingSource::CliFlag("--labels")),
				..ConfigSources::default()
			},
			..config()
		};

		let err = validate(&config).unwrap_err();
		assert_eq!(err.key, "ui.labels");
		assert_eq!(err.origin, SettingSource::CliFlag("--labels"));
	}
}
