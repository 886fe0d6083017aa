use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use super::App;
use crate::panel::ThumbnailStatus;
use crate::types::Product;
use crate::ui::components::{PanelContext, render_panel};

const LOG_DRAWER_PERCENT: u16 = 35;

impl App {
	/// Draw the panel, plus the log drawer when it is open.
	pub fn draw(&mut self, frame: &mut Frame) {
		let (panel_area, log_area) = self.split_area(frame.area());
		self.panel.observe(&self.snapshot);

		let view = self.panel.view(&self.snapshot);
		let tracker = &self.thumbnails;
		let loading = self.loader.is_some();
		let thumbnail = |product: &Product| {
			if loading {
				tracker.status(product)
			} else {
				ThumbnailStatus::Missing
			}
		};
		let placed = render_panel(
			frame,
			panel_area,
			PanelContext {
				view: &view,
				theme: &self.theme,
				throbber: self.panel.throbber(),
				cursor: self.cursor,
				offset: self.offset,
				thumbnail: &thumbnail,
			},
		);

		self.offset = placed.offset;
		self.page_rows = placed.page_rows.max(1);
		if let Some(loader) = self.loader.as_mut() {
			let results = &self.snapshot.results;
			self.thumbnails.sync(
				placed.visible().filter_map(|index| results.get(index)),
				loader.as_mut(),
			);
		}
		self.row_areas = placed.row_areas;

		if let Some(area) = log_area {
			self.render_logs(frame, area);
		}
	}

	fn split_area(&self, area: Rect) -> (Rect, Option<Rect>) {
		if !self.show_logs {
			return (area, None);
		}
		let [panel, logs] = Layout::vertical([
			Constraint::Percentage(100 - LOG_DRAWER_PERCENT),
			Constraint::Percentage(LOG_DRAWER_PERCENT),
		])
		.areas(area);
		(panel, Some(logs))
	}

	fn render_logs(&self, frame: &mut Frame, area: Rect) {
		let widget = TuiLoggerWidget::default()
			.block(
				Block::default()
					.borders(Borders::ALL)
					.border_set(ratatui::symbols::border::ROUNDED)
					.border_style(self.theme.border_style())
					.title(" Runtime log "),
			)
			.style(self.theme.muted_style())
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.output_target(false)
			.output_file(false)
			.output_line(false);
		frame.render_widget(widget, area);
	}
}
