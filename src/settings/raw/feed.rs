use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::cli::CliArgs;

/// `[feed]` values: where snapshots come from when running standalone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FeedSection {
	pub(super) fixture: Option<PathBuf>,
	pub(super) search_delay_ms: Option<u64>,
}

pub(super) struct FeedResolution {
	pub(super) fixture: Option<PathBuf>,
	pub(super) search_delay: Duration,
}

impl FeedSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(fixture) = cli.fixture.clone() {
			self.fixture = Some(fixture);
		}
		if let Some(delay) = cli.search_delay_ms {
			self.search_delay_ms = Some(delay);
		}
	}

	pub(super) fn finalize(self) -> FeedResolution {
		FeedResolution {
			fixture: self.fixture,
			search_delay: Duration::from_millis(self.search_delay_ms.unwrap_or(0)),
		}
	}
}
