//! Drag-and-drop reorder planning
//!
//! Pure list manipulation behind the optimistic reorder flows: move one item,
//! reassign sequential `order` values, and emit the order vector the backend
//! expects. The network half lives in the owning screens.

use crate::models::common::OrderUpdate;
use crate::models::{CarouselImage, TestimonialMessage};
use crate::utils::errors::{HubDeskError, Result};

/// An ordered record that can take part in a reorder flow
pub trait Orderable {
    fn record_id(&self) -> &str;
    fn order(&self) -> u32;
    fn set_order(&mut self, order: u32);
}

impl Orderable for CarouselImage {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

impl Orderable for TestimonialMessage {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

/// Move the item at `from` so it sits at `to`, shifting neighbours
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<()> {
    if from >= items.len() || to >= items.len() {
        return Err(HubDeskError::InvalidInput(format!(
            "Move out of range: {} -> {} over {} items",
            from,
            to,
            items.len()
        )));
    }

    let item = items.remove(from);
    items.insert(to, item);
    Ok(())
}

/// Assign each item's `order` to its index
pub fn sequence_orders<T: Orderable>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index as u32);
    }
}

/// The order vector submitted to the backend
pub fn order_updates<T: Orderable>(items: &[T]) -> Vec<OrderUpdate> {
    items
        .iter()
        .map(|item| OrderUpdate {
            id: item.record_id().to_string(),
            order: item.order(),
        })
        .collect()
}

/// Apply a move locally and build the submission for it
pub fn reorder_plan<T: Orderable>(
    items: &mut Vec<T>,
    from: usize,
    to: usize,
) -> Result<Vec<OrderUpdate>> {
    move_item(items, from, to)?;
    sequence_orders(items);
    Ok(order_updates(items))
}
