use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for the panel's elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Style for the panel border and title.
	pub header: Style,
	/// Style for the row under the cursor.
	pub row_highlight: Style,
	/// Style for the searching indicator.
	pub prompt: Style,
	/// Style for muted text: tips, brands, dividers.
	pub empty: Style,
	/// Style for the carbohydrate summary.
	pub highlight: Style,
	/// Style for the error title and message.
	pub error: Style,
}

impl Theme {
	/// Returns the style for secondary row text.
	#[must_use]
	pub fn muted_style(&self) -> Style {
		self.empty
	}

	/// Returns the style for the panel border.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	/// Returns the style for product names.
	#[must_use]
	pub fn name_style(&self) -> Style {
		Style::new().add_modifier(Modifier::BOLD)
	}
}

/// Static description of a built-in theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	/// The name of the theme.
	pub name: &'static str,
	/// Alternate names for the theme.
	pub aliases: &'static [&'static str],
	/// The theme configuration.
	pub theme: Theme,
}

impl ThemeDefinition {
	#[must_use]
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			aliases: &[],
			theme,
		}
	}

	#[must_use]
	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	pub(super) fn matches(&self, normalized: &str) -> bool {
		self.name == normalized || self.aliases.iter().any(|alias| *alias == normalized)
	}
}
