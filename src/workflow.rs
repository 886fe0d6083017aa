use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use foodpanel::panel::{Catalog, FileThumbnailLoader, PanelLabels, ProductSelected};
use foodpanel::ui::theme;
use foodpanel::{App, SearchSnapshot, UiConfig, logging};
use log::LevelFilter;

use crate::cli::Outcome;
use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive panel.
pub(crate) struct PanelWorkflow {
	ui: UiConfig,
	snapshot: SearchSnapshot,
	search_delay: Duration,
}

impl PanelWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		logging::initialize(logging::parse_level(&config.log_level).unwrap_or(LevelFilter::Info));

		let theme = theme::by_name(&config.theme)
			.ok_or_else(|| anyhow!("unknown theme '{}'", config.theme))?;
		let labels = match &config.labels {
			Some(path) => {
				let catalog = Catalog::load(path)?;
				log::info!("loaded {} label translations", catalog.len());
				PanelLabels::resolve(&catalog)
			}
			None => PanelLabels::default(),
		};
		let snapshot = match &config.fixture {
			Some(path) => SearchSnapshot::from_json_file(path)?,
			None => SearchSnapshot::default(),
		};

		let ui = UiConfig {
			exit_on_select: config.exit_on_select,
			show_logs: config.show_logs,
			..UiConfig::default()
		}
		.with_theme(theme)
		.with_labels(labels);

		Ok(Self {
			ui,
			snapshot,
			search_delay: config.search_delay,
		})
	}

	pub(crate) fn run(self) -> Result<Outcome> {
		let Self {
			ui,
			snapshot,
			search_delay,
		} = self;
		let labels = ui.labels.clone();

		let (selected_tx, selected_rx) = mpsc::channel::<ProductSelected>();
		let (loader, completions) =
			FileThumbnailLoader::spawn().context("failed to start thumbnail loader")?;

		let app = if search_delay.is_zero() {
			App::new(snapshot, ui, selected_tx)
		} else {
			let (updates_tx, updates_rx) = mpsc::channel();
			thread::Builder::new()
				.name("search-feed".into())
				.spawn(move || {
					thread::sleep(search_delay);
					// The panel may already be gone.
					let _ = updates_tx.send(snapshot);
				})
				.context("failed to start search feed")?;
			App::new(SearchSnapshot::searching(), ui, selected_tx).with_updates(updates_rx)
		};
		let mut app = app.with_thumbnails(loader, completions);

		app.run()?;
		drop(app);

		let selection = selected_rx.try_iter().last();
		if let Some(event) = &selection {
			log::info!("selected row {} ({})", event.index, event.product.id);
		}

		Ok(Outcome {
			accepted: selection.is_some(),
			selection: selection.map(|event| event.product),
			labels,
		})
	}
}
