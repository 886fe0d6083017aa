//! Runtime logging routed into the in-UI log drawer.
//!
//! Records go through the `log` facade and are buffered by `tui-logger`,
//! whose own thread moves them into the drawer. Nothing is written to the
//! terminal while the panel owns the screen.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the logger. Later calls only adjust the default level.
pub fn initialize(level: LevelFilter) {
	INIT.call_once(|| {
		if tui_logger::init_logger(LevelFilter::Trace).is_err() {
			// Another logger is already installed (e.g. by an embedding host).
			return;
		}
		log::debug!("logger initialised");
	});
	tui_logger::set_default_level(level);
}

/// Parse a level name from configuration.
#[must_use]
pub fn parse_level(name: &str) -> Option<LevelFilter> {
	name.trim().parse().ok()
}
