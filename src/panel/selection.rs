//! Outgoing selection events for the carb-entry collaborator.

use std::sync::mpsc::Sender;

use serde::Serialize;

use crate::types::Product;

/// A product picked by the user, carried by value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSelected {
	/// Row the product occupied when it was activated.
	pub index: usize,
	pub product: Product,
}

/// Receives one call per row activation.
///
/// The panel does not wait on the sink; any asynchronous follow-up work is the
/// receiver's business.
pub trait SelectionSink {
	fn selected(&mut self, event: ProductSelected);
}

impl<F> SelectionSink for F
where
	F: FnMut(ProductSelected),
{
	fn selected(&mut self, event: ProductSelected) {
		self(event);
	}
}

impl SelectionSink for Sender<ProductSelected> {
	fn selected(&mut self, event: ProductSelected) {
		if self.send(event).is_err() {
			log::warn!("selection receiver dropped; event discarded");
		}
	}
}

/// Collects events in memory. Used by the binary to hand the first pick back
/// to the caller.
#[derive(Debug, Default)]
pub struct SelectionLog {
	events: Vec<ProductSelected>,
}

impl SelectionLog {
	#[must_use]
	pub fn events(&self) -> &[ProductSelected] {
		&self.events
	}

	pub fn take(&mut self) -> Vec<ProductSelected> {
		std::mem::take(&mut self.events)
	}
}

impl SelectionSink for SelectionLog {
	fn selected(&mut self, event: ProductSelected) {
		self.events.push(event);
	}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;

	use super::*;
	use crate::types::{NutritionFacts, ProductId};

	fn event() -> ProductSelected {
		ProductSelected {
			index: 1,
			product: Product::new("b", "Bagel", NutritionFacts::carbs(48.9)),
		}
	}

	#[test]
	fn closures_receive_events() {
		let mut seen = Vec::new();
		{
			let mut sink = |event: ProductSelected| seen.push(event.product.id);
			sink.selected(event());
		}
		assert_eq!(seen, vec![ProductId::from("b")]);
	}

	#[test]
	fn channel_sink_forwards_full_product() {
		let (tx, rx) = mpsc::channel::<ProductSelected>();
		let mut sink = tx;
		sink.selected(event());
		assert_eq!(rx.try_recv().expect("event"), event());
	}

	#[test]
	fn channel_sink_tolerates_dropped_receiver() {
		let (tx, rx) = mpsc::channel::<ProductSelected>();
		drop(rx);
		let mut sink = tx;
		sink.selected(event());
	}
}
