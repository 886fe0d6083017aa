use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a product within one result set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
	#[must_use]
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ProductId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for ProductId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for ProductId {
	fn from(value: String) -> Self {
		Self(value)
	}
}

/// Upstream database or provider a product record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSource {
	OpenFoodFacts,
	Usda,
	AiAnalysis,
}

impl ProductSource {
	/// Short badge shown next to the brand line.
	#[must_use]
	pub fn badge(self) -> &'static str {
		match self {
			Self::OpenFoodFacts => "OFF",
			Self::Usda => "USDA",
			Self::AiAnalysis => "AI",
		}
	}
}

/// Nutrition facts per 100g of product.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionFacts {
	pub carbohydrates: f64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub protein: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fat: Option<f64>,
}

impl NutritionFacts {
	#[must_use]
	pub fn carbs(carbohydrates: f64) -> Self {
		Self {
			carbohydrates,
			protein: None,
			fat: None,
		}
	}

	#[must_use]
	pub fn with_protein(mut self, protein: f64) -> Self {
		self.protein = Some(protein);
		self
	}

	#[must_use]
	pub fn with_fat(mut self, fat: f64) -> Self {
		self.fat = Some(fat);
		self
	}
}

/// A food record as returned by the search collaborator.
///
/// Products are never modified by the panel. Values such as negative
/// carbohydrates are displayed exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
	pub id: ProductId,
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub brand: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image_url: Option<String>,
	pub nutrition: NutritionFacts,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub carbs_per_serving: Option<f64>,
	#[serde(default)]
	pub serving_size: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub source: Option<ProductSource>,
}

impl Product {
	/// Build a product with only the required fields populated.
	#[must_use]
	pub fn new(id: impl Into<ProductId>, name: impl Into<String>, nutrition: NutritionFacts) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			brand: None,
			image_url: None,
			nutrition,
			carbs_per_serving: None,
			serving_size: String::new(),
			source: None,
		}
	}

	#[must_use]
	pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
		self.brand = Some(brand.into());
		self
	}

	#[must_use]
	pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
		self.image_url = Some(url.into());
		self
	}

	/// Attach a per-serving carbohydrate value and its serving description.
	#[must_use]
	pub fn with_serving(mut self, carbs: f64, description: impl Into<String>) -> Self {
		self.carbs_per_serving = Some(carbs);
		self.serving_size = description.into();
		self
	}

	#[must_use]
	pub fn with_source(mut self, source: ProductSource) -> Self {
		self.source = Some(source);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserializes_minimal_record() {
		let json = r#"{
			"id": "737628064502",
			"name": "Rice noodles",
			"nutrition": { "carbohydrates": 80.5 }
		}"#;
		let product: Product = serde_json::from_str(json).expect("product");
		assert_eq!(product.id.as_str(), "737628064502");
		assert_eq!(product.brand, None);
		assert_eq!(product.nutrition.protein, None);
		assert_eq!(product.carbs_per_serving, None);
		assert!(product.serving_size.is_empty());
	}

	#[test]
	fn ids_convert_from_borrowed_and_owned_text() {
		assert_eq!(ProductId::from("off-1"), ProductId::from(String::from("off-1")));
		assert_eq!(ProductId::from(String::from("off-1")).to_string(), "off-1");
	}

	#[test]
	fn source_uses_snake_case_names() {
		let source: ProductSource = serde_json::from_str("\"open_food_facts\"").expect("source");
		assert_eq!(source, ProductSource::OpenFoodFacts);
		assert_eq!(source.badge(), "OFF");
	}
}
