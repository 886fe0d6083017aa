use std::fmt::Write;
use std::path::Path;

use super::{ResolvedConfig, SettingSource};

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let sources = &config.sources;
	let mut out = String::from("Effective configuration:\n");
	let _ = writeln!(
		out,
		"  Theme: {}{}",
		config.theme,
		origin(sources.theme.as_ref())
	);
	let _ = writeln!(
		out,
		"  Label catalog: {}{}",
		path_or(config.labels.as_deref(), "(built-in English)"),
		origin(sources.labels.as_ref())
	);
	let _ = writeln!(
		out,
		"  Exit on select: {}",
		bool_to_word(config.exit_on_select)
	);
	let _ = writeln!(out, "  Show logs: {}", bool_to_word(config.show_logs));
	let _ = writeln!(
		out,
		"  Fixture: {}{}",
		path_or(config.fixture.as_deref(), "(none)"),
		origin(sources.fixture.as_ref())
	);
	let _ = writeln!(
		out,
		"  Search delay: {}ms",
		config.search_delay.as_millis()
	);
	let _ = writeln!(
		out,
		"  Log level: {}{}",
		config.log_level,
		origin(sources.log_level.as_ref())
	);
	out
}

fn origin(source: Option<&SettingSource>) -> String {
	match source {
		Some(source) => format!(" (from {source})"),
		None => String::new(),
	}
}

fn path_or(path: Option<&Path>, fallback: &str) -> String {
	path.map_or_else(|| fallback.to_string(), |path| path.display().to_string())
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
