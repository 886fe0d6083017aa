use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from; `None` means the built-in default.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) theme: Option<SettingSource>,
	pub(crate) labels: Option<SettingSource>,
	pub(crate) fixture: Option<SettingSource>,
	pub(crate) log_level: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}

	pub(crate) fn source_for_labels(&self) -> SettingSource {
		self.labels
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.labels"))
	}

	pub(crate) fn source_for_fixture(&self) -> SettingSource {
		self.fixture
			.clone()
			.unwrap_or(SettingSource::ConfigKey("feed.fixture"))
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		self.log_level
			.clone()
			.unwrap_or(SettingSource::ConfigKey("log.level"))
	}
}
