use anyhow::Result;
use foodpanel::panel::nutrition_summary;
use foodpanel::{PanelLabels, Product};
use serde_json::json;

/// What the interactive session produced.
#[derive(Debug, Clone, Default)]
pub(crate) struct Outcome {
	pub(crate) accepted: bool,
	pub(crate) selection: Option<Product>,
	pub(crate) labels: PanelLabels,
}

/// Format the outcome as a single plain-text line.
pub(crate) fn format_plain(outcome: &Outcome) -> String {
	match &outcome.selection {
		Some(product) if outcome.accepted => format!(
			"{} — {}",
			product.name,
			nutrition_summary(product, &outcome.labels)
		),
		_ => "No selection".to_string(),
	}
}

/// Print a plain-text representation of the outcome.
pub(crate) fn print_plain(outcome: &Outcome) {
	println!("{}", format_plain(outcome));
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &Outcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"selection": outcome.selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &Outcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use foodpanel::{NutritionFacts, ProductSource};
	use serde_json::Value;

	use super::*;

	fn bread() -> Product {
		Product::new("b1", "Whole wheat bread", NutritionFacts::carbs(41.0))
			.with_serving(22.3, "1 slice (30g)")
			.with_source(ProductSource::Usda)
	}

	#[test]
	fn plain_format_names_product_and_serving() {
		let outcome = Outcome {
			accepted: true,
			selection: Some(bread()),
			..Outcome::default()
		};
		assert_eq!(
			format_plain(&outcome),
			"Whole wheat bread — 22.3g carbs per 1 slice (30g)"
		);
	}

	#[test]
	fn plain_format_without_selection() {
		assert_eq!(format_plain(&Outcome::default()), "No selection");
	}

	#[test]
	fn json_format_includes_product() {
		let outcome = Outcome {
			accepted: true,
			selection: Some(bread()),
			..Outcome::default()
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["selection"]["id"], "b1");
		assert_eq!(value["selection"]["source"], "usda");
		assert_eq!(value["selection"]["nutrition"]["carbohydrates"], 41.0);
	}

	#[test]
	fn json_format_uses_null_without_selection() {
		let json = format_outcome_json(&Outcome::default()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], false);
		assert!(value["selection"].is_null());
	}
}
