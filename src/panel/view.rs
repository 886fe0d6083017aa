//! Logical output of one render pass.

use super::rows::RowView;
use super::state::StateKind;

/// Everything the panel shows for one snapshot, independent of terminal size.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedView<'a> {
	Searching {
		status: &'a str,
	},
	Error {
		title: &'a str,
		/// The upstream message, verbatim.
		message: &'a str,
	},
	Empty {
		title: &'a str,
		tips: &'a [String],
	},
	Populated {
		title: &'a str,
		rows: Vec<RowView<'a>>,
	},
}

impl RenderedView<'_> {
	#[must_use]
	pub fn kind(&self) -> StateKind {
		match self {
			Self::Searching { .. } => StateKind::Searching,
			Self::Error { .. } => StateKind::Error,
			Self::Empty { .. } => StateKind::Empty,
			Self::Populated { .. } => StateKind::Populated,
		}
	}

	/// Rows of the populated state; empty for every other state.
	#[must_use]
	pub fn rows(&self) -> &[RowView<'_>] {
		match self {
			Self::Populated { rows, .. } => rows,
			_ => &[],
		}
	}
}
