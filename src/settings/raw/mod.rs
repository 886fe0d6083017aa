use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod feed;
mod ui;

use feed::FeedSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	feed: FeedSection,
	log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.ui.apply_cli_overrides(cli);
		self.feed.apply_cli_overrides(cli);
		if let Some(level) = cli.log_level.clone() {
			self.log.level = Some(level);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"FOODPANEL__UI__THEME",
				"--theme",
				"ui.theme",
			),
			labels: detect_source(
				cli.labels.is_some(),
				self.ui.labels.is_some(),
				"FOODPANEL__UI__LABELS",
				"--labels",
				"ui.labels",
			),
			fixture: detect_source(
				cli.fixture.is_some(),
				self.feed.fixture.is_some(),
				"FOODPANEL__FEED__FIXTURE",
				"--fixture",
				"feed.fixture",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.log.level.is_some(),
				"FOODPANEL__LOG__LEVEL",
				"--log-level",
				"log.level",
			),
		};

		let ui = self.ui.finalize();
		let feed = self.feed.finalize();

		let config = ResolvedConfig {
			theme: ui.theme,
			labels: ui.labels,
			exit_on_select: ui.exit_on_select,
			show_logs: ui.show_logs,
			fixture: feed.fixture,
			search_delay: feed.search_delay,
			log_level: self.log.level.unwrap_or_else(|| "info".to_string()),
			sources,
		};

		config.validate().map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
