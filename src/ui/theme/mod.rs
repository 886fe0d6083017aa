//! Color themes for the terminal panel.

mod builtins;
mod types;

pub use builtins::{LIGHT, SLATE, SOLARIZED};
pub use types::{Theme, ThemeDefinition};

use builtins::{BUILT_IN_DEFINITIONS, DEFAULT_NAME};

/// Return the theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// Return the built-in theme definitions.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeDefinition] {
	BUILT_IN_DEFINITIONS
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = normalize_name(name);
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.matches(&normalized))
		.map(|definition| definition.theme)
}

/// Return the canonical theme names, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
	let mut names: Vec<_> = BUILT_IN_DEFINITIONS.iter().map(|d| d.name).collect();
	names.sort_unstable();
	names
}

/// Name of the default theme.
#[must_use]
pub fn default_name() -> &'static str {
	DEFAULT_NAME
}
