use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `foodpanel` binary.
#[derive(Parser, Debug)]
#[command(
	name = "foodpanel",
	version,
	long_version = long_version(),
	about = "Browse food search results and pick one for carbohydrate entry",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "FOODPANEL_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'f',
		long,
		value_name = "FILE",
		help = "JSON file holding a search snapshot or a list of products (default: no results)"
	)]
	pub(crate) fixture: Option<PathBuf>,
	#[arg(
		short = 'd',
		long = "search-delay-ms",
		value_name = "MS",
		help = "Show the searching state for this long before the fixture arrives (default: 0)"
	)]
	pub(crate) search_delay_ms: Option<u64>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long,
		value_name = "FILE",
		help = "TOML catalog translating the panel's English labels (default: none)"
	)]
	pub(crate) labels: Option<PathBuf>,
	#[arg(
		long = "exit-on-select",
		value_parser = BoolishValueParser::new(),
		help = "Return after the first selection (default: enabled)"
	)]
	pub(crate) exit_on_select: Option<bool>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Minimum level shown in the log drawer (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "show-logs",
		help = "Open the log drawer on start (default: disabled)"
	)]
	pub(crate) show_logs: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the selection"
	)]
	pub(crate) output: OutputFormat,
}
