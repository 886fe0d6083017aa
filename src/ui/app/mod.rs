//! Application state for the terminal panel.

mod actions;
mod render;

use std::sync::mpsc::{Receiver, TryRecvError};

use ratatui::layout::Rect;

use crate::panel::{
	ResultPanel, ResultState, SelectionSink, ThumbnailCompletion, ThumbnailLoader, ThumbnailTracker,
};
use crate::types::SearchSnapshot;
use crate::ui::config::UiConfig;
use crate::ui::theme::Theme;

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Exit,
}

/// Terminal front-end around a [`ResultPanel`].
pub struct App {
	snapshot: SearchSnapshot,
	updates: Option<Receiver<SearchSnapshot>>,
	panel: ResultPanel,
	theme: Theme,
	exit_on_select: bool,
	sink: Box<dyn SelectionSink>,
	/// Row under the cursor in the populated state.
	cursor: usize,
	/// First row drawn during the last frame.
	offset: usize,
	/// Rows that fit on one page during the last frame.
	page_rows: usize,
	/// Screen areas of the rows drawn during the last frame.
	row_areas: Vec<(usize, Rect)>,
	thumbnails: ThumbnailTracker,
	loader: Option<Box<dyn ThumbnailLoader>>,
	completions: Option<Receiver<ThumbnailCompletion>>,
	show_logs: bool,
}

impl App {
	/// Create an app showing `snapshot`, relaying picks to `sink`.
	pub fn new(snapshot: SearchSnapshot, config: UiConfig, sink: impl SelectionSink + 'static) -> Self {
		Self {
			snapshot,
			updates: None,
			panel: ResultPanel::new(config.labels),
			theme: config.theme,
			exit_on_select: config.exit_on_select,
			sink: Box::new(sink),
			cursor: 0,
			offset: 0,
			page_rows: 1,
			row_areas: Vec::new(),
			thumbnails: ThumbnailTracker::new(),
			loader: None,
			completions: None,
			show_logs: config.show_logs,
		}
	}

	/// Receive replacement snapshots from the search collaborator.
	#[must_use]
	pub fn with_updates(mut self, updates: Receiver<SearchSnapshot>) -> Self {
		self.updates = Some(updates);
		self
	}

	/// Load row thumbnails through `loader`, reading its completions from
	/// `completions`.
	#[must_use]
	pub fn with_thumbnails(
		mut self,
		loader: impl ThumbnailLoader + 'static,
		completions: Receiver<ThumbnailCompletion>,
	) -> Self {
		self.loader = Some(Box::new(loader));
		self.completions = Some(completions);
		self
	}

	#[must_use]
	pub fn snapshot(&self) -> &SearchSnapshot {
		&self.snapshot
	}

	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	#[must_use]
	pub fn is_showing_logs(&self) -> bool {
		self.show_logs
	}

	/// Replace the displayed snapshot.
	///
	/// The cursor returns to the first row when the set of products changes,
	/// and is otherwise clamped to the new row count.
	pub fn apply_snapshot(&mut self, snapshot: SearchSnapshot) {
		let same_results = self
			.snapshot
			.results
			.iter()
			.map(|product| &product.id)
			.eq(snapshot.results.iter().map(|product| &product.id));
		if same_results {
			self.cursor = self.cursor.min(snapshot.results.len().saturating_sub(1));
		} else {
			self.cursor = 0;
			self.offset = 0;
		}

		log::debug!(
			"snapshot: searching={} error={} results={}",
			snapshot.is_searching,
			snapshot.error_message.is_some(),
			snapshot.results.len()
		);
		self.snapshot = snapshot;
	}

	/// Apply every snapshot queued by the search collaborator. Only the latest
	/// one is visible after the call.
	pub(crate) fn pump_updates(&mut self) {
		let Some(updates) = self.updates.as_ref() else {
			return;
		};

		let mut latest = None;
		let connected = loop {
			match updates.try_recv() {
				Ok(snapshot) => latest = Some(snapshot),
				Err(TryRecvError::Empty) => break true,
				Err(TryRecvError::Disconnected) => break false,
			}
		};
		if let Some(snapshot) = latest {
			self.apply_snapshot(snapshot);
		}
		if !connected {
			log::debug!("search feed closed");
			self.updates = None;
		}
	}

	/// Advance animations and apply finished thumbnail loads.
	pub fn tick(&mut self) {
		self.panel.tick();
		if let Some(completions) = self.completions.as_ref() {
			while let Ok(completion) = completions.try_recv() {
				self.thumbnails.complete(completion);
			}
		}
	}

	/// Number of rows selectable in the current state.
	fn selectable_rows(&self) -> usize {
		ResultState::from_snapshot(&self.snapshot).products().len()
	}
}
