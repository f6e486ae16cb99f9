//! Cart aggregator: the session's line collection with derived totals.
//!
//! The cart is session-scoped, in-memory state. It is not persisted, so a
//! new session always starts empty; the drawer open/closed flag is carried
//! here as presentation state and never affects the lines.
//!
//! The cart holds a by-value snapshot of each item's display fields captured
//! at add time - not a live reference into the inventory. It never consults
//! stock: the UI is responsible for disabling "add" at zero stock, and the
//! checkout commit is where stock is actually enforced (see
//! [`crate::checkout`]).

use serde::{Deserialize, Serialize};

use honeyshop_core::{ItemId, Price};

use crate::models::Item;

/// The display fields of an item, copied into a cart line at add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    /// Id of the inventory item this snapshot was taken from.
    pub id: ItemId,
    /// Display name at add time.
    pub name: String,
    /// Unit price at add time.
    pub price: Price,
    /// Image reference at add time.
    #[serde(rename = "image")]
    pub image_url: String,
}

impl From<&Item> for ItemSnapshot {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            image_url: item.image_url.clone(),
        }
    }
}

/// One cart line: an item snapshot plus the requested quantity (always >= 1;
/// a decrement to zero removes the line instead).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The captured item fields.
    pub item: ItemSnapshot,
    /// Requested units.
    pub quantity: u32,
}

impl CartLine {
    /// The line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.item.price.times(self.quantity)
    }
}

/// Derived cart totals, recomputed from the lines on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of line quantities.
    pub item_count: u64,
    /// Sum of line totals.
    pub total_price: Price,
}

/// The session cart.
///
/// Lines keep insertion order (display order); at most one line exists per
/// distinct item id.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    is_open: bool,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `item`.
    ///
    /// If a line for the item's id already exists its quantity is
    /// incremented; otherwise a new line with quantity 1 is appended.
    /// Always succeeds; no stock ceiling is checked here.
    pub fn add_item(&mut self, item: &Item) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.item.id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }

        self.lines.push(CartLine {
            item: ItemSnapshot::from(item),
            quantity: 1,
        });
    }

    /// Remove the line for `item_id`, if present. A no-op (not an error)
    /// when the line is absent.
    pub fn remove_item(&mut self, item_id: &ItemId) {
        self.lines.retain(|line| &line.item.id != item_id);
    }

    /// Set the quantity for `item_id`.
    ///
    /// A quantity of zero or less behaves exactly like
    /// [`remove_item`](Self::remove_item), so callers can pass a decremented
    /// value straight through. Setting a quantity for an absent id is a
    /// no-op. No upper bound is enforced against stock.
    pub fn set_quantity(&mut self, item_id: &ItemId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(item_id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|line| &line.item.id == item_id) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart. Used by the user-initiated "empty cart" action and by
    /// a committed checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The lines in display order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Derived totals, recomputed from the current lines - never cached, so
    /// they can never be stale after a mutation.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            item_count: self.lines.iter().map(|line| u64::from(line.quantity)).sum(),
            total_price: self.lines.iter().map(CartLine::line_total).sum(),
        }
    }

    // =========================================================================
    // Drawer presentation state
    // =========================================================================

    /// Mark the cart drawer open.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Mark the cart drawer closed.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Whether the drawer is open. Presentation state only; the lines are
    /// unaffected by this flag.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use honeyshop_core::{CategoryId, Rating};

    use super::*;

    fn item(id: &str, cents: i64) -> Item {
        Item {
            id: ItemId::new(id),
            name: format!("Item {id}"),
            description: String::new(),
            price: Price::from_cents(cents),
            image_url: String::new(),
            category_id: CategoryId::new("raw-honey"),
            rating: Rating::NEUTRAL,
            stock_quantity: 5,
            featured: false,
        }
    }

    #[test]
    fn test_repeated_add_merges_into_one_line() {
        let mut cart = Cart::new();
        let a = item("h1", 1_000);

        cart.add_item(&a);
        cart.add_item(&a);
        cart.add_item(&a);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines().first().unwrap().quantity, 3);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(&item("h2", 800));
        cart.add_item(&item("h1", 1_000));
        cart.add_item(&item("h2", 800));

        let ids: Vec<_> = cart.lines().iter().map(|l| l.item.id.as_str()).collect();
        assert_eq!(ids, ["h2", "h1"]);
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let a = item("h1", 1_000);

        let mut via_set = Cart::new();
        via_set.add_item(&a);
        via_set.set_quantity(&a.id, 0);

        let mut via_remove = Cart::new();
        via_remove.add_item(&a);
        via_remove.remove_item(&a.id);

        assert!(via_set.is_empty());
        assert!(via_remove.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_removes_too() {
        let mut cart = Cart::new();
        let a = item("h1", 1_000);
        cart.add_item(&a);

        cart.set_quantity(&a.id, -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_for_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.set_quantity(&ItemId::new("ghost"), 4);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&item("h1", 1_000));
        cart.remove_item(&ItemId::new("ghost"));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_totals_scenario() {
        // Seed item A: price 10.00, add three times.
        let mut cart = Cart::new();
        let a = item("a", 1_000);

        cart.add_item(&a);
        cart.add_item(&a);
        cart.add_item(&a);
        let totals = cart.totals();
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.total_price, Price::from_cents(3_000));

        cart.set_quantity(&a.id, 1);
        let totals = cart.totals();
        assert_eq!(totals.item_count, 1);
        assert_eq!(totals.total_price, Price::from_cents(1_000));

        cart.remove_item(&a.id);
        let totals = cart.totals();
        assert_eq!(totals.item_count, 0);
        assert_eq!(totals.total_price, Price::ZERO);
    }

    #[test]
    fn test_totals_across_mixed_lines() {
        let mut cart = Cart::new();
        let a = item("h1", 1_250);
        let b = item("h2", 800);

        cart.add_item(&a);
        cart.add_item(&b);
        cart.set_quantity(&b.id, 4);

        let totals = cart.totals();
        assert_eq!(totals.item_count, 5);
        assert_eq!(totals.total_price, Price::from_cents(1_250 + 4 * 800));
    }

    #[test]
    fn test_snapshot_is_captured_at_add_time() {
        let mut cart = Cart::new();
        let mut a = item("h1", 1_000);
        cart.add_item(&a);

        // A later price change in the inventory does not touch the line.
        a.price = Price::from_cents(9_999);
        assert_eq!(
            cart.lines().first().unwrap().item.price,
            Price::from_cents(1_000)
        );
    }

    #[test]
    fn test_drawer_flag_does_not_touch_lines() {
        let mut cart = Cart::new();
        cart.add_item(&item("h1", 1_000));

        assert!(!cart.is_open());
        cart.open();
        assert!(cart.is_open());
        cart.close();
        assert!(!cart.is_open());
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&item("h1", 1_000));
        cart.add_item(&item("h2", 800));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.totals().item_count, 0);
    }
}
