//! The food-search result panel.
//!
//! [`ResultPanel::view`] turns a [`SearchSnapshot`] into a [`RenderedView`]:
//! exactly one of the searching, error, empty, or populated states, with the
//! populated rows in upstream order. [`ResultPanel::activate`] relays a picked
//! row to a [`SelectionSink`]. The panel owns no search data and performs no
//! I/O; the only state it keeps is the searching animation phase.

pub mod labels;
pub mod rows;
pub mod selection;
pub mod state;
pub mod thumbnails;
pub mod view;

use throbber_widgets_tui::ThrobberState;

pub use labels::{Catalog, CatalogError, English, Localizer, PanelLabels};
pub use rows::{RowView, nutrition_summary, truncate_end, wrap_words};
pub use selection::{ProductSelected, SelectionLog, SelectionSink};
pub use state::{ResultState, StateKind};
pub use thumbnails::{
	FileThumbnailLoader, ThumbnailCompletion, ThumbnailLoader, ThumbnailStatus, ThumbnailTicket,
	ThumbnailTracker,
};
pub use view::RenderedView;

use crate::types::SearchSnapshot;

/// Presentation logic for a food-search result list.
#[derive(Debug, Default)]
pub struct ResultPanel {
	labels: PanelLabels,
	last_kind: Option<StateKind>,
	throbber: ThrobberState,
	animation_frame: u64,
}

impl ResultPanel {
	#[must_use]
	pub fn new(labels: PanelLabels) -> Self {
		Self {
			labels,
			..Self::default()
		}
	}

	/// Build a panel whose static text is resolved through `localizer`.
	#[must_use]
	pub fn localized(localizer: &dyn Localizer) -> Self {
		Self::new(PanelLabels::resolve(localizer))
	}

	#[must_use]
	pub fn labels(&self) -> &PanelLabels {
		&self.labels
	}

	/// Compute the logical view for a snapshot.
	///
	/// Pure: identical snapshots always produce identical views.
	#[must_use]
	pub fn view<'a>(&'a self, snapshot: &'a SearchSnapshot) -> RenderedView<'a> {
		match ResultState::from_snapshot(snapshot) {
			ResultState::Searching => RenderedView::Searching {
				status: &self.labels.searching,
			},
			ResultState::Error(message) => RenderedView::Error {
				title: &self.labels.error_title,
				message,
			},
			ResultState::Empty => RenderedView::Empty {
				title: &self.labels.empty_title,
				tips: &self.labels.empty_tips,
			},
			ResultState::Populated(products) => {
				let last = products.len() - 1;
				let rows = products
					.iter()
					.enumerate()
					.map(|(index, product)| RowView::new(index, product, index == last, &self.labels))
					.collect();
				RenderedView::Populated {
					title: &self.labels.results_title,
					rows,
				}
			}
		}
	}

	/// Note the state about to be drawn, restarting the searching animation
	/// whenever the panel enters the searching state.
	pub fn observe(&mut self, snapshot: &SearchSnapshot) -> StateKind {
		let kind = ResultState::from_snapshot(snapshot).kind();
		if self.last_kind != Some(kind) {
			log::debug!("result panel: {:?} -> {kind:?}", self.last_kind);
			if kind == StateKind::Searching {
				self.throbber = ThrobberState::default();
				self.animation_frame = 0;
			}
			self.last_kind = Some(kind);
		}
		kind
	}

	/// Advance the searching animation by one frame.
	pub fn tick(&mut self) {
		if self.last_kind == Some(StateKind::Searching) {
			self.throbber.calc_next();
			self.animation_frame += 1;
		}
	}

	#[must_use]
	pub fn throbber(&self) -> &ThrobberState {
		&self.throbber
	}

	/// Frames elapsed since the panel last entered the searching state.
	#[must_use]
	pub fn animation_frame(&self) -> u64 {
		self.animation_frame
	}

	/// Relay the product at `index` to `sink`.
	///
	/// Emits exactly one event when `index` names a row of the populated
	/// state, and nothing otherwise. Returns whether an event was emitted.
	pub fn activate(
		&self,
		snapshot: &SearchSnapshot,
		index: usize,
		sink: &mut dyn SelectionSink,
	) -> bool {
		let Some(product) = ResultState::from_snapshot(snapshot).products().get(index) else {
			return false;
		};
		log::info!("selected {} ({})", product.name, product.id);
		sink.selected(ProductSelected {
			index,
			product: product.clone(),
		});
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::{NutritionFacts, Product};

	fn abc() -> Vec<Product> {
		vec![
			Product::new("a", "Apple", NutritionFacts::carbs(14.0)),
			Product::new("b", "Banana", NutritionFacts::carbs(23.0))
				.with_serving(27.0, "1 medium (118g)"),
			Product::new("c", "Cracker", NutritionFacts::carbs(71.3)),
		]
	}

	fn describe(view: &RenderedView<'_>) -> String {
		match view {
			RenderedView::Searching { status } => format!("searching: {status}"),
			RenderedView::Error { title, message } => format!("{title}: {message}"),
			RenderedView::Empty { title, tips } => format!("{title}\n{}", tips.join("\n")),
			RenderedView::Populated { title, rows } => {
				let mut out = vec![title.to_string()];
				for row in rows {
					out.push(format!("{} | {}", row.name, row.nutrition));
					if row.divider_after {
						out.push("---".to_string());
					}
				}
				out.join("\n")
			}
		}
	}

	#[test]
	fn populated_rows_keep_order_with_inner_dividers() {
		let panel = ResultPanel::default();
		let snapshot = SearchSnapshot::with_results(abc());
		let view = panel.view(&snapshot);
		insta::assert_snapshot!(describe(&view), @r"
		Search Results
		Apple | 14.0g carbs per 100g
		---
		Banana | 27.0g carbs per 1 medium (118g)
		---
		Cracker | 71.3g carbs per 100g
		");
	}

	#[test]
	fn empty_state_shows_static_tips() {
		let panel = ResultPanel::default();
		let snapshot = SearchSnapshot::default();
		let view = panel.view(&snapshot);
		insta::assert_snapshot!(describe(&view), @r"
		No Results Found
		Try a different search term
		Check the spelling of the food name
		Scan the barcode for packaged foods
		");
	}

	#[test]
	fn searching_ignores_error_and_results() {
		let panel = ResultPanel::default();
		let snapshot = SearchSnapshot {
			is_searching: true,
			error_message: Some("stale failure".into()),
			results: abc(),
		};
		assert_eq!(
			panel.view(&snapshot),
			RenderedView::Searching {
				status: labels::SEARCHING
			}
		);
	}

	#[test]
	fn error_message_is_shown_verbatim() {
		let panel = ResultPanel::default();
		let message = "  USDA: 503 Service Unavailable\n(retry later)  ";
		let snapshot = SearchSnapshot {
			error_message: Some(message.into()),
			results: abc(),
			..SearchSnapshot::default()
		};
		match panel.view(&snapshot) {
			RenderedView::Error { message: shown, .. } => assert_eq!(shown, message),
			other => panic!("expected error state, got {other:?}"),
		}
	}

	#[test]
	fn repeated_views_are_identical() {
		let panel = ResultPanel::default();
		let snapshot = SearchSnapshot::with_results(abc());
		assert_eq!(panel.view(&snapshot), panel.view(&snapshot));
	}

	#[test]
	fn activation_emits_one_event_with_the_product() {
		let panel = ResultPanel::default();
		let snapshot = SearchSnapshot::with_results(abc());
		let mut log = SelectionLog::default();

		assert!(panel.activate(&snapshot, 1, &mut log));
		let events = log.take();
		assert_eq!(events.len(), 1);
		assert_eq!(events[0].index, 1);
		assert_eq!(events[0].product, snapshot.results[1]);
	}

	#[test]
	fn activation_outside_populated_state_is_ignored() {
		let panel = ResultPanel::default();
		let mut log = SelectionLog::default();

		let searching = SearchSnapshot {
			is_searching: true,
			results: abc(),
			..SearchSnapshot::default()
		};
		assert!(!panel.activate(&searching, 0, &mut log));
		assert!(!panel.activate(&SearchSnapshot::with_results(abc()), 3, &mut log));
		assert!(log.events().is_empty());
	}

	#[test]
	fn animation_restarts_on_each_searching_entry() {
		let mut panel = ResultPanel::default();
		panel.observe(&SearchSnapshot::searching());
		panel.tick();
		panel.tick();
		assert_eq!(panel.animation_frame(), 2);

		panel.observe(&SearchSnapshot::searching());
		assert_eq!(panel.animation_frame(), 2);

		panel.observe(&SearchSnapshot::with_results(abc()));
		panel.tick();
		assert_eq!(panel.animation_frame(), 2);

		panel.observe(&SearchSnapshot::searching());
		assert_eq!(panel.animation_frame(), 0);
	}

	#[test]
	fn localized_panel_uses_catalog_text() {
		let catalog =
			Catalog::from_toml_str(r#""No Results Found" = "Keine Ergebnisse""#).expect("catalog");
		let panel = ResultPanel::localized(&catalog);
		match panel.view(&SearchSnapshot::default()) {
			RenderedView::Empty { title, .. } => assert_eq!(title, "Keine Ergebnisse"),
			other => panic!("expected empty state, got {other:?}"),
		}
	}
}
