//! Checkout: commit the session cart against inventory stock.
//!
//! Placing an order decrements stock - deliberately, as the one transactional
//! link between the cart and the inventory. The whole order is validated
//! against the current snapshot before anything is written: either every line
//! can be satisfied and stock is decremented in a single snapshot store, or
//! the order is rejected with a report of every failing line and neither the
//! inventory nor the cart changes.

use thiserror::Error;
use tracing::info;

use honeyshop_core::Price;

use crate::cart::{Cart, CartLine};
use crate::db::{InventoryError, InventoryStore, StockIssue};
use crate::storage::Storage;

/// Errors from placing an order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The cart has no lines.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,

    /// One or more lines cannot be satisfied from current stock. Carries
    /// every failing line; the inventory and the cart are unchanged.
    #[error("{} line(s) rejected against current stock", .0.len())]
    Rejected(Vec<StockIssue>),

    /// The inventory snapshot could not be read or written.
    #[error(transparent)]
    Inventory(InventoryError),
}

/// Summary of a successfully placed order, captured before the cart is
/// cleared.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    /// The ordered lines, in display order.
    pub lines: Vec<CartLine>,
    /// Total units across all lines.
    pub item_count: u64,
    /// Order total.
    pub total_price: Price,
}

/// Place the order currently in `cart`.
///
/// On success stock is decremented for every line in one snapshot write, the
/// cart is cleared, and the order summary is returned.
///
/// # Errors
///
/// - [`OrderError::EmptyCart`] if the cart has no lines.
/// - [`OrderError::Rejected`] if any line asks for more units than are in
///   stock or references an item no longer in the inventory; all failing
///   lines are reported and nothing is modified.
/// - [`OrderError::Inventory`] if the snapshot cannot be read or written.
pub fn place_order<S: Storage>(
    cart: &mut Cart,
    inventory: &InventoryStore<S>,
) -> Result<OrderSummary, OrderError> {
    if cart.is_empty() {
        return Err(OrderError::EmptyCart);
    }

    let demands: Vec<_> = cart
        .lines()
        .iter()
        .map(|line| (line.item.id.clone(), line.quantity))
        .collect();

    inventory.commit_decrements(&demands).map_err(|e| match e {
        InventoryError::RejectedLines(issues) => OrderError::Rejected(issues),
        other => OrderError::Inventory(other),
    })?;

    let totals = cart.totals();
    let summary = OrderSummary {
        lines: cart.lines().to_vec(),
        item_count: totals.item_count,
        total_price: totals.total_price,
    };
    cart.clear();

    info!(
        lines = summary.lines.len(),
        items = summary.item_count,
        total = %summary.total_price,
        "order placed"
    );
    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use honeyshop_core::{CategoryId, ItemId, Rating};

    use super::*;
    use crate::models::Item;
    use crate::storage::MemoryStorage;

    fn seed_item(id: &str, cents: i64, stock: u32) -> Item {
        Item {
            id: ItemId::new(id),
            name: format!("Item {id}"),
            description: String::new(),
            price: Price::from_cents(cents),
            image_url: String::new(),
            category_id: CategoryId::new("raw-honey"),
            rating: Rating::NEUTRAL,
            stock_quantity: stock,
            featured: false,
        }
    }

    fn seeded_inventory() -> InventoryStore<MemoryStorage> {
        let inventory = InventoryStore::new(MemoryStorage::new());
        inventory
            .initialize(&[seed_item("h1", 1_000, 5), seed_item("h2", 800, 2)])
            .unwrap();
        inventory
    }

    #[test]
    fn test_place_order_decrements_and_clears() {
        let inventory = seeded_inventory();
        let items = inventory.list().unwrap();

        let mut cart = Cart::new();
        cart.add_item(items.first().unwrap());
        cart.add_item(items.first().unwrap());
        cart.add_item(items.get(1).unwrap());

        let summary = place_order(&mut cart, &inventory).unwrap();
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.total_price, Price::from_cents(2_800));
        assert_eq!(summary.lines.len(), 2);

        assert!(cart.is_empty());
        assert_eq!(
            inventory.get(&ItemId::new("h1")).unwrap().unwrap().stock_quantity,
            3
        );
        assert_eq!(
            inventory.get(&ItemId::new("h2")).unwrap().unwrap().stock_quantity,
            1
        );
    }

    #[test]
    fn test_place_order_empty_cart() {
        let inventory = seeded_inventory();
        let mut cart = Cart::new();

        let err = place_order(&mut cart, &inventory).unwrap_err();
        assert!(matches!(err, OrderError::EmptyCart));
    }

    #[test]
    fn test_rejected_order_changes_nothing() {
        let inventory = seeded_inventory();
        let items = inventory.list().unwrap();
        let h2 = items.get(1).unwrap();

        let mut cart = Cart::new();
        cart.add_item(items.first().unwrap());
        cart.add_item(h2);
        cart.set_quantity(&h2.id, 10); // only 2 in stock

        let err = place_order(&mut cart, &inventory).unwrap_err();
        let OrderError::Rejected(issues) = err else {
            panic!("expected Rejected");
        };
        assert_eq!(issues.len(), 1);

        // Inventory untouched, cart untouched.
        assert_eq!(
            inventory.get(&ItemId::new("h1")).unwrap().unwrap().stock_quantity,
            5
        );
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.totals().item_count, 11);
    }

    #[test]
    fn test_order_against_removed_item_is_rejected() {
        let inventory = seeded_inventory();
        let items = inventory.list().unwrap();
        let h1 = items.first().unwrap();

        let mut cart = Cart::new();
        cart.add_item(h1);
        inventory.remove(&h1.id).unwrap();

        let err = place_order(&mut cart, &inventory).unwrap_err();
        let OrderError::Rejected(issues) = err else {
            panic!("expected Rejected");
        };
        assert!(matches!(
            issues.first().unwrap(),
            crate::db::StockIssue::UnknownItem { .. }
        ));
        assert_eq!(cart.lines().len(), 1);
    }
}
