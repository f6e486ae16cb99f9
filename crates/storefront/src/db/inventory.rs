//! Inventory store: the authoritative set of sellable items.
//!
//! Holds the full item collection under the `inventory` storage key and
//! exposes read/write operations with quantity-safety guarantees: a stock
//! count can never go negative, and every mutation validates before the
//! single snapshot write.

use thiserror::Error;
use tracing::{debug, info};

use honeyshop_core::{ItemId, Rating};

use super::RepositoryError;
use crate::models::{Item, NewItem};
use crate::storage::{INVENTORY_KEY, Storage, load_json, store_json};

/// A cart line the inventory cannot satisfy at commit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockIssue {
    /// The item no longer exists in the inventory.
    UnknownItem {
        /// Id the order referenced.
        item_id: ItemId,
    },
    /// More units were requested than are in stock.
    InsufficientStock {
        /// Id of the short item.
        item_id: ItemId,
        /// Display name, for the order-failure report.
        name: String,
        /// Units the order asked for.
        requested: u32,
        /// Units currently in stock.
        available: u32,
    },
}

/// Errors from inventory operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The targeted item id is not in the store.
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    /// A quantity update asked for a negative stock count.
    #[error("stock quantity cannot be negative (got {0})")]
    NegativeQuantity(i64),

    /// An added item has a blank name.
    #[error("item name cannot be blank")]
    BlankName,

    /// One or more order lines cannot be satisfied from current stock.
    /// Carries every failing line, not just the first.
    #[error("{} order line(s) cannot be satisfied from stock", .0.len())]
    RejectedLines(Vec<StockIssue>),

    /// The underlying snapshot could not be read or written.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<crate::storage::StorageError> for InventoryError {
    fn from(e: crate::storage::StorageError) -> Self {
        Self::Repository(RepositoryError::Storage(e))
    }
}

/// Repository for the inventory snapshot.
///
/// All operations are synchronous; writes replace the whole snapshot. With
/// multiple concurrent writers the last write wins (see [`crate::storage`]).
pub struct InventoryStore<S> {
    storage: S,
}

impl<S: Storage> InventoryStore<S> {
    /// Create an inventory store over a storage handle.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Seed the inventory from a static catalog, once.
    ///
    /// Writes a snapshot derived from `seed_items` if no inventory snapshot
    /// exists yet. Idempotent: when data is already present this is a no-op,
    /// even if the seed differs.
    ///
    /// # Errors
    ///
    /// Returns an error only if the snapshot cannot be read or written.
    pub fn initialize(&self, seed_items: &[Item]) -> Result<(), InventoryError> {
        if self.storage.contains(INVENTORY_KEY)? {
            debug!("inventory already initialized, leaving snapshot untouched");
            return Ok(());
        }

        store_json(&self.storage, INVENTORY_KEY, &seed_items)?;
        info!(items = seed_items.len(), "seeded inventory");
        Ok(())
    }

    /// The full ordered item collection.
    ///
    /// Returns an empty collection if the inventory was never initialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or decoded.
    pub fn list(&self) -> Result<Vec<Item>, InventoryError> {
        Ok(load_json(&self.storage, INVENTORY_KEY)?.unwrap_or_default())
    }

    /// Look up a single item by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or decoded.
    pub fn get(&self, item_id: &ItemId) -> Result<Option<Item>, InventoryError> {
        Ok(self.list()?.into_iter().find(|item| &item.id == item_id))
    }

    /// Overwrite an item's stock count.
    ///
    /// On success the stored record reflects exactly `new_quantity`.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NegativeQuantity`] for a negative request
    /// and [`InventoryError::UnknownItem`] for an id not in the store; in
    /// both cases the snapshot is unchanged.
    pub fn set_quantity(&self, item_id: &ItemId, new_quantity: i64) -> Result<(), InventoryError> {
        let quantity =
            u32::try_from(new_quantity).map_err(|_| InventoryError::NegativeQuantity(new_quantity))?;

        let mut items = self.list()?;
        let item = items
            .iter_mut()
            .find(|item| &item.id == item_id)
            .ok_or_else(|| InventoryError::UnknownItem(item_id.clone()))?;

        item.stock_quantity = quantity;
        store_json(&self.storage, INVENTORY_KEY, &items)?;
        Ok(())
    }

    /// Hard-delete an item.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::UnknownItem`] if the id is not in the
    /// store; repeating a successful removal therefore fails.
    pub fn remove(&self, item_id: &ItemId) -> Result<(), InventoryError> {
        let mut items = self.list()?;
        let before = items.len();
        items.retain(|item| &item.id != item_id);

        if items.len() == before {
            return Err(InventoryError::UnknownItem(item_id.clone()));
        }

        store_json(&self.storage, INVENTORY_KEY, &items)?;
        info!(item_id = %item_id, "removed inventory item");
        Ok(())
    }

    /// Add a new item with a freshly generated id.
    ///
    /// Defaults an unspecified rating to [`Rating::NEUTRAL`] and an
    /// unspecified `featured` flag to `false`. Returns the created item.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::BlankName`] if the name is empty after
    /// trimming, or a repository error if the snapshot write fails (the
    /// in-memory state is discarded in that case; nothing is partially
    /// applied).
    pub fn add(&self, new_item: NewItem) -> Result<Item, InventoryError> {
        if new_item.name.trim().is_empty() {
            return Err(InventoryError::BlankName);
        }

        let item = Item {
            id: ItemId::random(),
            name: new_item.name,
            description: new_item.description,
            price: new_item.price,
            image_url: new_item.image_url,
            category_id: new_item.category_id,
            rating: new_item.rating.unwrap_or(Rating::NEUTRAL),
            stock_quantity: new_item.stock_quantity,
            featured: new_item.featured.unwrap_or(false),
        };

        let mut items = self.list()?;
        items.push(item.clone());
        store_json(&self.storage, INVENTORY_KEY, &items)?;
        info!(item_id = %item.id, name = %item.name, "added inventory item");
        Ok(item)
    }

    /// Update an item's featured flag.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::UnknownItem`] if the id is not in the store.
    pub fn set_featured(&self, item_id: &ItemId, featured: bool) -> Result<(), InventoryError> {
        let mut items = self.list()?;
        let item = items
            .iter_mut()
            .find(|item| &item.id == item_id)
            .ok_or_else(|| InventoryError::UnknownItem(item_id.clone()))?;

        item.featured = featured;
        store_json(&self.storage, INVENTORY_KEY, &items)?;
        Ok(())
    }

    /// Atomically decrement stock for a set of order lines.
    ///
    /// Validates every `(item_id, quantity)` demand against the current
    /// snapshot first; only if all lines can be satisfied is the snapshot
    /// written, in a single store. On rejection the snapshot is unchanged
    /// and every failing line is reported.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::RejectedLines`] with one [`StockIssue`] per
    /// unsatisfiable line.
    pub fn commit_decrements(&self, demands: &[(ItemId, u32)]) -> Result<(), InventoryError> {
        let mut items = self.list()?;
        let mut issues = Vec::new();

        for (item_id, requested) in demands {
            match items.iter().find(|item| &item.id == item_id) {
                None => issues.push(StockIssue::UnknownItem {
                    item_id: item_id.clone(),
                }),
                Some(item) if item.stock_quantity < *requested => {
                    issues.push(StockIssue::InsufficientStock {
                        item_id: item_id.clone(),
                        name: item.name.clone(),
                        requested: *requested,
                        available: item.stock_quantity,
                    });
                }
                Some(_) => {}
            }
        }

        if !issues.is_empty() {
            return Err(InventoryError::RejectedLines(issues));
        }

        for (item_id, requested) in demands {
            if let Some(item) = items.iter_mut().find(|item| &item.id == item_id) {
                item.stock_quantity -= requested;
            }
        }

        store_json(&self.storage, INVENTORY_KEY, &items)?;
        debug!(lines = demands.len(), "committed stock decrements");
        Ok(())
    }
}
