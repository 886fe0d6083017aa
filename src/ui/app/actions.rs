use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, Flow};
use crate::ui::components::point_in_rect;

impl App {
	/// Process a keyboard event.
	pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Flow::Exit,
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Flow::Exit;
			}
			KeyCode::Enter => return self.activate(self.cursor),
			KeyCode::F(2) => self.toggle_logs(),
			KeyCode::Up | KeyCode::Char('k') => self.move_cursor_up(1),
			KeyCode::Down | KeyCode::Char('j') => self.move_cursor_down(1),
			KeyCode::PageUp => self.move_cursor_up(self.page_rows),
			KeyCode::PageDown => self.move_cursor_down(self.page_rows),
			KeyCode::Home | KeyCode::Char('g') => self.cursor = 0,
			KeyCode::End | KeyCode::Char('G') => {
				self.cursor = self.selectable_rows().saturating_sub(1);
			}
			_ => {}
		}
		Flow::Continue
	}

	/// Process a mouse event. A left click on a row moves the cursor there and
	/// activates it.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Flow {
		match mouse.kind {
			MouseEventKind::ScrollUp => self.move_cursor_up(1),
			MouseEventKind::ScrollDown => self.move_cursor_down(1),
			MouseEventKind::Down(MouseButton::Left) => {
				let hit = self
					.row_areas
					.iter()
					.find(|(_, area)| point_in_rect(mouse.column, mouse.row, *area))
					.map(|(index, _)| *index);
				if let Some(index) = hit {
					self.cursor = index;
					return self.activate(index);
				}
			}
			_ => {}
		}
		Flow::Continue
	}

	/// Relay the product at `index` to the selection sink.
	fn activate(&mut self, index: usize) -> Flow {
		let emitted = self
			.panel
			.activate(&self.snapshot, index, self.sink.as_mut());
		if emitted && self.exit_on_select {
			Flow::Exit
		} else {
			Flow::Continue
		}
	}

	fn toggle_logs(&mut self) {
		self.show_logs = !self.show_logs;
		log::debug!("log drawer {}", if self.show_logs { "opened" } else { "closed" });
	}

	fn move_cursor_up(&mut self, step: usize) {
		self.cursor = self.cursor.saturating_sub(step.max(1));
	}

	fn move_cursor_down(&mut self, step: usize) {
		let last = self.selectable_rows().saturating_sub(1);
		self.cursor = self.cursor.saturating_add(step.max(1)).min(last);
	}
}
