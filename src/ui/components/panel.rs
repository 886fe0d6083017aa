//! Terminal rendering of a [`RenderedView`].

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use super::scrollbar::render_scrollbar;
use crate::panel::{RenderedView, RowView, ThumbnailStatus, truncate_end, wrap_words};
use crate::types::Product;
use crate::ui::theme::Theme;

/// Indent of every row line after the thumbnail glyph column.
const ROW_INDENT: usize = 2;
const DIVIDER: &str = "─";
const DETAIL_SEPARATOR: &str = " · ";

/// Inputs for drawing the panel.
pub struct PanelContext<'a> {
	pub view: &'a RenderedView<'a>,
	pub theme: &'a Theme,
	pub throbber: &'a ThrobberState,
	/// Row under the cursor in the populated state.
	pub cursor: usize,
	/// First row drawn during the previous frame.
	pub offset: usize,
	pub thumbnail: &'a dyn Fn(&Product) -> ThumbnailStatus,
}

/// Geometry of the rows drawn in one frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PanelFrame {
	/// Screen area of each drawn row, keyed by row index.
	pub row_areas: Vec<(usize, Rect)>,
	/// First row drawn.
	pub offset: usize,
	/// Number of rows that fit entirely in the viewport.
	pub page_rows: usize,
}

impl PanelFrame {
	/// Indices of the rows drawn this frame, in order.
	pub fn visible(&self) -> impl Iterator<Item = usize> + '_ {
		self.row_areas.iter().map(|(index, _)| *index)
	}
}

/// Draw the panel into `area`.
pub fn render_panel(frame: &mut Frame, area: Rect, context: PanelContext<'_>) -> PanelFrame {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(context.theme.border_style());
	if let RenderedView::Populated { title, rows } = context.view {
		block = block.title(format!(" {title} ({}) ", rows.len()));
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.width == 0 || inner.height == 0 {
		return PanelFrame::default();
	}

	match context.view {
		RenderedView::Searching { status } => {
			render_searching(frame, inner, status, context.throbber, context.theme);
			PanelFrame::default()
		}
		RenderedView::Error { title, message } => {
			render_error(frame, inner, title, message, context.theme);
			PanelFrame::default()
		}
		RenderedView::Empty { title, tips } => {
			render_empty(frame, inner, title, tips, context.theme);
			PanelFrame::default()
		}
		RenderedView::Populated { rows, .. } => render_rows(frame, inner, rows, &context),
	}
}

fn render_searching(
	frame: &mut Frame,
	area: Rect,
	status: &str,
	throbber: &ThrobberState,
	theme: &Theme,
) {
	let spinner = Throbber::default()
		.style(theme.prompt)
		.throbber_style(theme.prompt.add_modifier(Modifier::BOLD));
	let line = Line::from(vec![
		spinner.to_symbol_span(throbber),
		Span::styled(status.to_string(), theme.prompt),
	]);
	let paragraph = Paragraph::new(line).alignment(Alignment::Center);
	frame.render_widget(paragraph, centered_rows(area, 1));
}

fn render_error(frame: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
	let paragraph = Paragraph::new(error_text(title, message, theme))
		.alignment(Alignment::Center)
		.wrap(Wrap { trim: false });
	// Height after wrapping.
	let height = u16::try_from(paragraph.line_count(area.width)).unwrap_or(u16::MAX);
	frame.render_widget(paragraph, centered_rows(area, height));
}

/// Title, blank spacer, then the message split only on `\n`.
fn error_text(title: &str, message: &str, theme: &Theme) -> Text<'static> {
	let mut text = Text::from(vec![
		Line::styled(format!("⚠ {title}"), theme.error.add_modifier(Modifier::BOLD)),
		Line::default(),
	]);
	for line in message.split('\n') {
		text.push_line(Line::styled(line.to_string(), theme.error));
	}
	text
}

fn render_empty(frame: &mut Frame, area: Rect, title: &str, tips: &[String], theme: &Theme) {
	let mut lines = vec![
		Line::styled(title.to_string(), theme.name_style()),
		Line::default(),
	];
	lines.extend(
		tips.iter()
			.map(|tip| Line::styled(format!("• {tip}"), theme.muted_style())),
	);

	let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
	let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
	frame.render_widget(paragraph, centered_rows(area, height));
}

fn render_rows(
	frame: &mut Frame,
	area: Rect,
	rows: &[RowView<'_>],
	context: &PanelContext<'_>,
) -> PanelFrame {
	let viewport = usize::from(area.height);
	let mut content = area;
	let mut heights = slot_heights(rows, usize::from(content.width));
	let needs_scrollbar = heights.iter().sum::<usize>() > viewport;
	if needs_scrollbar {
		content.width = content.width.saturating_sub(1);
		heights = slot_heights(rows, usize::from(content.width));
	}

	let cursor = context.cursor.min(rows.len().saturating_sub(1));
	let offset = scroll_offset(context.offset, cursor, &heights, viewport);
	if needs_scrollbar {
		render_scrollbar(frame, area, rows.len(), offset, context.theme);
	}

	let width = usize::from(content.width);
	let bottom = content.bottom();
	let mut y = content.y;
	let mut placed = PanelFrame {
		offset,
		..PanelFrame::default()
	};

	for row in rows.iter().skip(offset) {
		if y >= bottom {
			break;
		}
		let status = (context.thumbnail)(row.product);
		let lines = row_lines(row, width, status, context.theme);
		let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
		let visible_height = height.min(bottom - y);
		let row_area = Rect::new(content.x, y, content.width, visible_height);

		let mut paragraph = Paragraph::new(lines);
		if row.index == cursor {
			paragraph = paragraph.style(context.theme.row_highlight);
		}
		frame.render_widget(paragraph, row_area);
		placed.row_areas.push((row.index, row_area));
		if visible_height == height {
			placed.page_rows += 1;
		}
		y = y.saturating_add(height);

		if row.divider_after && y < bottom {
			let divider = Line::styled(DIVIDER.repeat(width), context.theme.muted_style());
			frame.render_widget(Paragraph::new(divider), Rect::new(content.x, y, content.width, 1));
			y += 1;
		}
	}

	placed
}

/// Lines drawn for one row at the given content width.
fn row_lines(
	row: &RowView<'_>,
	width: usize,
	thumbnail: ThumbnailStatus,
	theme: &Theme,
) -> Vec<Line<'static>> {
	let text_width = width.saturating_sub(ROW_INDENT).max(1);
	let indent = " ".repeat(ROW_INDENT);
	let mut lines = Vec::new();

	for (i, part) in wrap_words(row.name, text_width).into_iter().enumerate() {
		let lead = if i == 0 {
			Span::styled(format!("{} ", thumbnail.glyph()), theme.muted_style())
		} else {
			Span::raw(indent.clone())
		};
		lines.push(Line::from(vec![lead, Span::styled(part, theme.name_style())]));
	}

	if let Some(line) = brand_line(row, text_width, theme) {
		lines.push(Line::from(vec![Span::raw(indent.clone()), line]));
	}

	let mut nutrition = vec![
		Span::raw(indent),
		Span::styled(row.nutrition.clone(), theme.highlight),
	];
	for extra in &row.extras {
		nutrition.push(Span::styled(
			format!("{DETAIL_SEPARATOR}{extra}"),
			theme.muted_style(),
		));
	}
	lines.push(Line::from(nutrition));
	lines
}

fn brand_line(row: &RowView<'_>, width: usize, theme: &Theme) -> Option<Span<'static>> {
	let badge = row.source_badge.map(|badge| format!("[{badge}]"));
	let text = match (row.brand, badge) {
		(None, None) => return None,
		(None, Some(badge)) => badge,
		(Some(brand), None) => truncate_end(brand, width),
		(Some(brand), Some(badge)) => {
			let brand_width = width.saturating_sub(badge.width() + 1);
			format!("{} {badge}", truncate_end(brand, brand_width))
		}
	};
	Some(Span::styled(text, theme.muted_style().add_modifier(Modifier::ITALIC)))
}

/// Height of each row plus its trailing divider.
fn slot_heights(rows: &[RowView<'_>], width: usize) -> Vec<usize> {
	let text_width = width.saturating_sub(ROW_INDENT).max(1);
	rows.iter()
		.map(|row| {
			let name = wrap_words(row.name, text_width).len();
			let brand = usize::from(row.brand.is_some() || row.source_badge.is_some());
			name + brand + 1 + usize::from(row.divider_after)
		})
		.collect()
}

/// Choose the first row to draw so the cursor row is fully visible.
///
/// Keeps the previous offset when the cursor is already on screen, so the list
/// only scrolls when the cursor would leave the viewport.
pub(crate) fn scroll_offset(
	previous: usize,
	cursor: usize,
	heights: &[usize],
	viewport: usize,
) -> usize {
	if heights.is_empty() || viewport == 0 {
		return 0;
	}
	let cursor = cursor.min(heights.len() - 1);
	let mut offset = previous.min(cursor);
	while offset < cursor && heights[offset..=cursor].iter().sum::<usize>() > viewport {
		offset += 1;
	}
	offset
}

fn centered_rows(area: Rect, height: u16) -> Rect {
	let height = height.min(area.height);
	let top = area.y + (area.height - height) / 2;
	Rect::new(area.x, top, area.width, height)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn offset_stays_put_while_cursor_visible() {
		let heights = [3, 3, 3, 3];
		assert_eq!(scroll_offset(0, 1, &heights, 7), 0);
		assert_eq!(scroll_offset(1, 2, &heights, 7), 1);
	}

	#[test]
	fn offset_follows_cursor_down() {
		let heights = [3, 3, 3, 3];
		assert_eq!(scroll_offset(0, 2, &heights, 7), 1);
		assert_eq!(scroll_offset(0, 3, &heights, 7), 2);
	}

	#[test]
	fn offset_follows_cursor_up() {
		let heights = [3, 3, 3, 3];
		assert_eq!(scroll_offset(3, 1, &heights, 7), 1);
	}

	#[test]
	fn tall_cursor_row_is_drawn_first() {
		assert_eq!(scroll_offset(0, 1, &[2, 20], 5), 1);
		assert_eq!(scroll_offset(5, 0, &[], 5), 0);
	}

	#[test]
	fn error_text_keeps_message_bytes() {
		let text = error_text("Search Error", "HTTP 503\r\nretry later\n", &Theme::default());
		let lines: Vec<String> = text.lines.iter().map(ToString::to_string).collect();
		assert_eq!(lines, ["⚠ Search Error", "", "HTTP 503\r", "retry later", ""]);
	}

	#[test]
	fn centered_rows_clamps_to_area() {
		let area = Rect::new(0, 0, 10, 5);
		assert_eq!(centered_rows(area, 1), Rect::new(0, 2, 10, 1));
		assert_eq!(centered_rows(area, 9), area);
	}
}
