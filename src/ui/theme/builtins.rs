use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeDefinition};

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::LightRed),
};

pub const SOLARIZED: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(7, 54, 66)),
	row_highlight: Style::new()
		.bg(Color::Rgb(0, 43, 54))
		.fg(Color::Rgb(181, 137, 0)),
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	empty: Style::new().fg(Color::Rgb(88, 110, 117)),
	highlight: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(220, 50, 47)),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(170, 30, 30)),
};

pub(super) const DEFAULT_NAME: &str = "slate";

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition::new("light", LIGHT).with_aliases(&["day"]),
	ThemeDefinition::new(DEFAULT_NAME, SLATE).with_aliases(&["dark", "default"]),
	ThemeDefinition::new("solarized", SOLARIZED).with_aliases(&["solarized-dark"]),
];
