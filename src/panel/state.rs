//! Presentation state selection.

use crate::types::{Product, SearchSnapshot};

/// The single presentation state active for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultState<'a> {
	Searching,
	Error(&'a str),
	Empty,
	Populated(&'a [Product]),
}

/// Discriminant of [`ResultState`] without borrowed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
	Searching,
	Error,
	Empty,
	Populated,
}

impl<'a> ResultState<'a> {
	/// Select the presentation state for the given inputs.
	///
	/// The checks run in a fixed order: an in-flight search hides any error or
	/// stale results, an error hides results, and only then is the result set
	/// tested for emptiness. An empty error string counts as no error.
	#[must_use]
	pub fn resolve(
		is_searching: bool,
		error_message: Option<&'a str>,
		results: &'a [Product],
	) -> Self {
		if is_searching {
			return Self::Searching;
		}
		if let Some(message) = error_message.filter(|message| !message.is_empty()) {
			return Self::Error(message);
		}
		if results.is_empty() {
			return Self::Empty;
		}
		Self::Populated(results)
	}

	#[must_use]
	pub fn from_snapshot(snapshot: &'a SearchSnapshot) -> Self {
		Self::resolve(
			snapshot.is_searching,
			snapshot.error_message.as_deref(),
			&snapshot.results,
		)
	}

	#[must_use]
	pub fn kind(&self) -> StateKind {
		match self {
			Self::Searching => StateKind::Searching,
			Self::Error(_) => StateKind::Error,
			Self::Empty => StateKind::Empty,
			Self::Populated(_) => StateKind::Populated,
		}
	}

	/// Products selectable in this state.
	#[must_use]
	pub fn products(&self) -> &'a [Product] {
		match *self {
			Self::Populated(products) => products,
			_ => &[],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::NutritionFacts;

	fn products() -> Vec<Product> {
		vec![
			Product::new("a", "Apple", NutritionFacts::carbs(14.0)),
			Product::new("b", "Bread", NutritionFacts::carbs(49.0)),
		]
	}

	#[test]
	fn searching_wins_over_everything() {
		let results = products();
		let state = ResultState::resolve(true, Some("timeout"), &results);
		assert_eq!(state, ResultState::Searching);
		assert_eq!(ResultState::resolve(true, None, &[]), ResultState::Searching);
	}

	#[test]
	fn error_wins_over_results() {
		let results = products();
		assert_eq!(
			ResultState::resolve(false, Some("X"), &results),
			ResultState::Error("X")
		);
		assert_eq!(ResultState::resolve(false, Some("X"), &[]), ResultState::Error("X"));
	}

	#[test]
	fn empty_error_string_is_ignored() {
		let results = products();
		assert_eq!(ResultState::resolve(false, Some(""), &[]), ResultState::Empty);
		assert_eq!(
			ResultState::resolve(false, Some(""), &results).kind(),
			StateKind::Populated
		);
	}

	#[test]
	fn empty_results_without_error() {
		assert_eq!(ResultState::resolve(false, None, &[]), ResultState::Empty);
	}

	#[test]
	fn populated_keeps_input_order() {
		let results = products();
		let state = ResultState::resolve(false, None, &results);
		let names: Vec<_> = state.products().iter().map(|p| p.name.as_str()).collect();
		assert_eq!(names, ["Apple", "Bread"]);
	}

	#[test]
	fn exactly_one_state_for_every_input_combination() {
		let results = products();
		for is_searching in [false, true] {
			for error in [None, Some(""), Some("boom")] {
				for set in [&results[..0], &results[..]] {
					let state = ResultState::resolve(is_searching, error, set);
					let expected = if is_searching {
						StateKind::Searching
					} else if error.is_some_and(|e| !e.is_empty()) {
						StateKind::Error
					} else if set.is_empty() {
						StateKind::Empty
					} else {
						StateKind::Populated
					};
					assert_eq!(state.kind(), expected);
					assert_eq!(ResultState::resolve(is_searching, error, set), state);
				}
			}
		}
	}
}
