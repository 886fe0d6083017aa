//! Per-product row content.

use unicode_truncate::UnicodeTruncateStr;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::labels::PanelLabels;
use crate::types::Product;

const ELLIPSIS: &str = "…";

/// Logical content of one result row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView<'a> {
	/// Position of the row in the result set.
	pub index: usize,
	pub product: &'a Product,
	pub name: &'a str,
	pub brand: Option<&'a str>,
	pub source_badge: Option<&'static str>,
	/// Carbohydrate summary, per serving when available.
	pub nutrition: String,
	/// Protein and fat labels, only for values that are present.
	pub extras: Vec<String>,
	/// Whether a divider follows this row.
	pub divider_after: bool,
}

impl<'a> RowView<'a> {
	pub(crate) fn new(index: usize, product: &'a Product, is_last: bool, labels: &PanelLabels) -> Self {
		Self {
			index,
			product,
			name: &product.name,
			brand: product.brand.as_deref(),
			source_badge: product.source.map(|source| source.badge()),
			nutrition: nutrition_summary(product, labels),
			extras: macro_labels(product, labels),
			divider_after: !is_last,
		}
	}
}

/// Format the carbohydrate line for a product.
///
/// A per-serving value takes priority over the per-100g value. Both use one
/// decimal place.
#[must_use]
pub fn nutrition_summary(product: &Product, labels: &PanelLabels) -> String {
	match product.carbs_per_serving {
		Some(carbs) => format!("{carbs:.1}{} {}", labels.carbs_per, product.serving_size),
		None => format!(
			"{:.1}{} {}",
			product.nutrition.carbohydrates, labels.carbs_per, labels.per_100g
		),
	}
}

fn macro_labels(product: &Product, labels: &PanelLabels) -> Vec<String> {
	let facts = &product.nutrition;
	[(facts.protein, &labels.protein), (facts.fat, &labels.fat)]
		.into_iter()
		.filter_map(|(value, unit)| value.map(|value| format!("{value:.1}{unit}")))
		.collect()
}

/// Shorten `text` to `max_width` columns, marking the cut with an ellipsis.
#[must_use]
pub fn truncate_end(text: &str, max_width: usize) -> String {
	if max_width == 0 {
		return String::new();
	}
	if text.width() <= max_width {
		return text.to_string();
	}

	let ellipsis_width = ELLIPSIS.width();
	if max_width <= ellipsis_width {
		return ELLIPSIS.to_string();
	}

	let (slice, _) = text.unicode_truncate(max_width - ellipsis_width);
	let mut truncated = slice.trim_end().to_string();
	truncated.push_str(ELLIPSIS);
	truncated
}

/// Soft-wrap `text` on whitespace so no line exceeds `max_width` columns.
///
/// Words wider than a full line are broken at the column limit. Nothing is
/// dropped, so the joined lines always contain every word of the input.
#[must_use]
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
	if max_width == 0 {
		return Vec::new();
	}

	let mut lines = Vec::new();
	let mut current = String::new();
	let mut current_width = 0;

	for word in text.split_whitespace() {
		let word_width = word.width();
		let separator = usize::from(!current.is_empty());

		if current_width + separator + word_width <= max_width {
			if separator == 1 {
				current.push(' ');
			}
			current.push_str(word);
			current_width += separator + word_width;
			continue;
		}

		if !current.is_empty() {
			lines.push(std::mem::take(&mut current));
			current_width = 0;
		}

		if word_width <= max_width {
			current.push_str(word);
			current_width = word_width;
			continue;
		}

		for ch in word.chars() {
			let ch_width = ch.width().unwrap_or(0);
			if current_width + ch_width > max_width && !current.is_empty() {
				lines.push(std::mem::take(&mut current));
				current_width = 0;
			}
			current.push(ch);
			current_width += ch_width;
		}
	}

	if !current.is_empty() || lines.is_empty() {
		lines.push(current);
	}
	lines
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::NutritionFacts;

	#[test]
	fn per_serving_value_takes_priority() {
		let product = Product::new("bread", "Whole wheat bread", NutritionFacts::carbs(41.0))
			.with_serving(22.3, "1 slice (30g)");
		assert_eq!(
			nutrition_summary(&product, &PanelLabels::default()),
			"22.3g carbs per 1 slice (30g)"
		);
	}

	#[test]
	fn falls_back_to_per_100g() {
		let product = Product::new("milk", "Milk", NutritionFacts::carbs(8.0));
		assert_eq!(
			nutrition_summary(&product, &PanelLabels::default()),
			"8.0g carbs per 100g"
		);
	}

	#[test]
	fn negative_values_render_as_is() {
		let product = Product::new("odd", "Odd", NutritionFacts::carbs(-3.0));
		assert_eq!(
			nutrition_summary(&product, &PanelLabels::default()),
			"-3.0g carbs per 100g"
		);
	}

	#[test]
	fn absent_macros_are_omitted() {
		let labels = PanelLabels::default();
		let bare = Product::new("a", "Apple", NutritionFacts::carbs(14.0));
		assert!(macro_labels(&bare, &labels).is_empty());

		let fat_only = Product::new("b", "Butter", NutritionFacts::carbs(0.1).with_fat(81.0));
		assert_eq!(macro_labels(&fat_only, &labels), ["81.0g fat"]);

		let both = Product::new(
			"c",
			"Cheese",
			NutritionFacts::carbs(1.3).with_protein(25.0).with_fat(33.1),
		);
		assert_eq!(macro_labels(&both, &labels), ["25.0g protein", "33.1g fat"]);
	}

	#[test]
	fn truncation_adds_ellipsis_only_on_overflow() {
		assert_eq!(truncate_end("Kellogg's", 20), "Kellogg's");
		assert_eq!(truncate_end("Kellogg's Company", 10), "Kellogg's…");
		assert_eq!(truncate_end("Kellogg's", 1), "…");
		assert_eq!(truncate_end("Kellogg's", 0), "");
	}

	#[test]
	fn wrapping_keeps_every_word() {
		let lines = wrap_words("Organic whole grain rolled oats", 12);
		assert_eq!(lines, ["Organic", "whole grain", "rolled oats"]);
		assert_eq!(wrap_words("Supercalifragilistic", 8), ["Supercal", "ifragili", "stic"]);
		assert_eq!(wrap_words("", 8), [""]);
	}
}
