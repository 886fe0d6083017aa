use std::path::PathBuf;
use std::time::Duration;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub theme: String,
	pub labels: Option<PathBuf>,
	pub exit_on_select: bool,
	pub show_logs: bool,
	pub fixture: Option<PathBuf>,
	pub search_delay: Duration,
	pub log_level: String,
	pub(crate) sources: ConfigSources,
}

impl ResolvedConfig {
	pub(super) fn validate(&self) -> Result<(), ConfigError> {
		validation::validate(self)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::render_summary(self));
	}
}
