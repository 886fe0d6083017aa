use std::path::PathBuf;

use foodpanel::ui::theme;
use serde::Deserialize;

use crate::cli::CliArgs;

/// `[ui]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) labels: Option<PathBuf>,
	pub(super) exit_on_select: Option<bool>,
	pub(super) show_logs: Option<bool>,
}

pub(super) struct UiResolution {
	pub(super) theme: String,
	pub(super) labels: Option<PathBuf>,
	pub(super) exit_on_select: bool,
	pub(super) show_logs: bool,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(labels) = cli.labels.clone() {
			self.labels = Some(labels);
		}
		if let Some(exit) = cli.exit_on_select {
			self.exit_on_select = Some(exit);
		}
		if cli.show_logs {
			self.show_logs = Some(true);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		UiResolution {
			theme: self
				.theme
				.unwrap_or_else(|| theme::default_name().to_string()),
			labels: self.labels,
			exit_on_select: self.exit_on_select.unwrap_or(true),
			show_logs: self.show_logs.unwrap_or(false),
		}
	}
}
