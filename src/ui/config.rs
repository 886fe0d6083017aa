use crate::panel::PanelLabels;
use crate::ui::theme::Theme;

/// Presentation settings for the terminal front-end.
#[derive(Debug, Clone)]
pub struct UiConfig {
	pub theme: Theme,
	pub labels: PanelLabels,
	/// Leave the event loop after the first selection.
	pub exit_on_select: bool,
	/// Open the log drawer on start.
	pub show_logs: bool,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			theme: Theme::default(),
			labels: PanelLabels::default(),
			exit_on_select: true,
			show_logs: false,
		}
	}
}

impl UiConfig {
	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	#[must_use]
	pub fn with_labels(mut self, labels: PanelLabels) -> Self {
		self.labels = labels;
		self
	}
}
