use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Product;

/// The three inputs observed by the result panel on every render.
///
/// The search collaborator replaces a snapshot as a whole, so the panel never
/// sees `is_searching` cleared before the matching `results` arrive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSnapshot {
	pub is_searching: bool,
	pub error_message: Option<String>,
	pub results: Vec<Product>,
}

impl SearchSnapshot {
	/// Snapshot for a search that is still in flight.
	#[must_use]
	pub fn searching() -> Self {
		Self {
			is_searching: true,
			..Self::default()
		}
	}

	/// Snapshot for a failed search.
	#[must_use]
	pub fn failed(message: impl Into<String>) -> Self {
		Self {
			error_message: Some(message.into()),
			..Self::default()
		}
	}

	/// Snapshot for a completed search.
	#[must_use]
	pub fn with_results(results: Vec<Product>) -> Self {
		Self {
			results,
			..Self::default()
		}
	}

	/// Load a snapshot from a JSON fixture.
	///
	/// The file may hold either a full snapshot object or a bare array of
	/// products, which is read as a completed search.
	pub fn from_json_file(path: &Path) -> Result<Self, FixtureError> {
		let contents = fs::read_to_string(path).map_err(|source| FixtureError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_json_str(&contents).map_err(|source| FixtureError::Parse {
			path: path.to_path_buf(),
			source,
		})
	}

	/// Parse a snapshot from JSON text. See [`SearchSnapshot::from_json_file`].
	pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Fixture {
			Products(Vec<Product>),
			Snapshot(SearchSnapshot),
		}

		Ok(match serde_json::from_str(json)? {
			Fixture::Products(results) => Self::with_results(results),
			Fixture::Snapshot(snapshot) => snapshot,
		})
	}
}

#[derive(Debug, Error)]
pub enum FixtureError {
	#[error("failed to read search fixture {}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse search fixture {}", path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn bare_array_is_a_completed_search() {
		let snapshot = SearchSnapshot::from_json_str(
			r#"[{ "id": "a", "name": "Apple", "nutrition": { "carbohydrates": 14.0 } }]"#,
		)
		.expect("fixture");
		assert!(!snapshot.is_searching);
		assert_eq!(snapshot.error_message, None);
		assert_eq!(snapshot.results.len(), 1);
	}

	#[test]
	fn object_fields_default_when_missing() {
		let snapshot =
			SearchSnapshot::from_json_str(r#"{ "error_message": "Network unavailable" }"#)
				.expect("fixture");
		assert!(!snapshot.is_searching);
		assert!(snapshot.results.is_empty());
		assert_eq!(snapshot.error_message.as_deref(), Some("Network unavailable"));
	}

	#[test]
	fn reads_fixture_from_disk() {
		let mut file = tempfile::NamedTempFile::new().expect("tempfile");
		write!(file, r#"{{ "is_searching": true }}"#).expect("write");
		let snapshot = SearchSnapshot::from_json_file(file.path()).expect("fixture");
		assert_eq!(snapshot, SearchSnapshot::searching());
	}

	#[test]
	fn parse_errors_name_the_file() {
		let mut file = tempfile::NamedTempFile::new().expect("tempfile");
		write!(file, "not json").expect("write");
		let err = SearchSnapshot::from_json_file(file.path()).expect_err("invalid fixture");
		assert!(matches!(err, FixtureError::Parse { .. }));
		assert!(err.to_string().contains(&file.path().display().to_string()));
	}
}
