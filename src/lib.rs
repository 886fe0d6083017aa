//! Food-search result panel.
//!
//! The crate turns the output of an external food search (an in-flight flag,
//! an optional error message, and an ordered list of products) into exactly
//! one presentation state, draws it in the terminal, and hands the product a
//! user picks to the carbohydrate-entry side as a [`ProductSelected`] event.

pub mod app_dirs;
pub mod logging;
pub mod panel;
pub mod types;
pub mod ui;

pub use panel::{
	Catalog, Localizer, PanelLabels, ProductSelected, RenderedView, ResultPanel, ResultState,
	SelectionSink, StateKind,
};
pub use types::{NutritionFacts, Product, ProductId, ProductSource, SearchSnapshot};
pub use ui::{App, Theme, UiConfig};
