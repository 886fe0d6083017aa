//! Records exchanged with the search and carb-entry collaborators.

mod product;
mod snapshot;

pub use product::{NutritionFacts, Product, ProductId, ProductSource};
pub use snapshot::{FixtureError, SearchSnapshot};
