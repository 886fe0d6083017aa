//! Static panel text and its translation lookup.
//!
//! Every string is keyed by the English text it replaces, so an empty catalog
//! renders the panel in English.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const SEARCHING: &str = "Searching for food...";
pub const ERROR_TITLE: &str = "Search Error";
pub const EMPTY_TITLE: &str = "No Results Found";
pub const EMPTY_TIPS: [&str; 3] = [
	"Try a different search term",
	"Check the spelling of the food name",
	"Scan the barcode for packaged foods",
];
pub const CARBS_PER: &str = "g carbs per";
pub const PER_100G: &str = "100g";
pub const PROTEIN: &str = "g protein";
pub const FAT: &str = "g fat";
pub const RESULTS_TITLE: &str = "Search Results";

/// Resolves English UI text to the active language.
pub trait Localizer {
	fn localize<'a>(&'a self, text: &'a str) -> Cow<'a, str>;
}

/// Leaves every string untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Localizer for English {
	fn localize<'a>(&'a self, text: &'a str) -> Cow<'a, str> {
		Cow::Borrowed(text)
	}
}

/// Translation table loaded from a TOML file of `"English" = "Translated"` pairs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	entries: HashMap<String, String>,
}

impl Catalog {
	#[must_use]
	pub fn new(entries: HashMap<String, String>) -> Self {
		Self { entries }
	}

	/// Parse a catalog from TOML text.
	pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
		let entries: HashMap<String, String> = toml::from_str(contents)?;
		Ok(Self { entries })
	}

	/// Load a catalog file from disk.
	pub fn load(path: &Path) -> Result<Self, CatalogError> {
		let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&contents).map_err(|source| CatalogError::Parse {
			path: path.to_path_buf(),
			source,
		})
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Localizer for Catalog {
	fn localize<'a>(&'a self, text: &'a str) -> Cow<'a, str> {
		match self.entries.get(text) {
			Some(translated) => Cow::Borrowed(translated.as_str()),
			None => Cow::Borrowed(text),
		}
	}
}

#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("failed to read label catalog {}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse label catalog {}", path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

/// All static text shown by the panel, resolved once per localizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLabels {
	pub searching: String,
	pub error_title: String,
	pub empty_title: String,
	pub empty_tips: Vec<String>,
	pub results_title: String,
	pub carbs_per: String,
	pub per_100g: String,
	pub protein: String,
	pub fat: String,
}

impl PanelLabels {
	/// Resolve every label through `localizer`.
	#[must_use]
	pub fn resolve(localizer: &dyn Localizer) -> Self {
		let text = |key: &str| localizer.localize(key).into_owned();
		Self {
			searching: text(SEARCHING),
			error_title: text(ERROR_TITLE),
			empty_title: text(EMPTY_TITLE),
			empty_tips: EMPTY_TIPS.iter().map(|tip| text(*tip)).collect(),
			results_title: text(RESULTS_TITLE),
			carbs_per: text(CARBS_PER),
			per_100g: text(PER_100G),
			protein: text(PROTEIN),
			fat: text(FAT),
		}
	}
}

impl Default for PanelLabels {
	fn default() -> Self {
		Self::resolve(&English)
	}
}
