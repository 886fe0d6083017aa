//! Application runtime and event loop.

use std::collections::VecDeque;
use std::io::{self, stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use super::app::{App, Flow};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const INPUT_POLL: Duration = Duration::from_millis(50);

impl App {
	/// Pump the terminal event loop until the user exits.
	pub fn run(&mut self) -> Result<()> {
		let mut terminal = ratatui::init();
		prepare_terminal(
			&mut terminal,
			|| execute!(stdout(), EnableMouseCapture),
			ratatui::restore,
		)?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(INPUT_POLL)? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<()> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut flow = Flow::Continue;
			while let Some(event) = pending_events.pop_front() {
				flow = match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => Flow::Continue,
				};
				if flow == Flow::Exit {
					break;
				}
			}

			if flow == Flow::Exit {
				break Ok(());
			}

			self.pump_updates();
			self.tick();

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(FRAME_INTERVAL);
		};

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}

/// Clear the screen and enable mouse reporting, calling `restore` before
/// returning any error.
fn prepare_terminal<B: Backend>(
	terminal: &mut Terminal<B>,
	enable_mouse: impl FnOnce() -> io::Result<()>,
	restore: impl FnOnce(),
) -> Result<()> {
	let prepared = terminal.clear().and_then(|()| enable_mouse());
	if let Err(err) = prepared {
		restore();
		return Err(err.into());
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use ratatui::backend::TestBackend;

	use super::*;

	#[test]
	fn failed_mouse_capture_restores_terminal() {
		let mut terminal = Terminal::new(TestBackend::new(10, 4)).expect("terminal");
		let restored = Cell::new(false);

		let result = prepare_terminal(
			&mut terminal,
			|| Err(io::Error::other("mouse capture unsupported")),
			|| restored.set(true),
		);

		assert!(result.is_err());
		assert!(restored.get());
	}

	#[test]
	fn successful_setup_leaves_terminal_alone() {
		let mut terminal = Terminal::new(TestBackend::new(10, 4)).expect("terminal");
		let restored = Cell::new(false);

		prepare_terminal(&mut terminal, || Ok(()), || restored.set(true)).expect("prepared");

		assert!(!restored.get());
	}
}
