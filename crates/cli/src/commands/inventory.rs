//! Inventory management commands.
//!
//! The CLI stands in for the admin panel: every mutation goes through the
//! same [`InventoryStore`] operations the panel would call.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use honeyshop_core::{CategoryId, ItemId, Price, PriceError};
use honeyshop_storefront::{InventoryStore, NewItem};

use super::open_storage;

/// Errors specific to parsing inventory command input.
#[derive(Debug, Error)]
pub enum InventoryCommandError {
    /// The price argument is not a decimal number.
    #[error("Invalid price {0:?}: expected a decimal amount like 12.50")]
    UnparsablePrice(String),

    /// The price argument parsed but is not a valid price.
    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceError),
}

/// List all items with stock counts.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read.
pub fn list() -> Result<(), Box<dyn std::error::Error>> {
    let inventory = InventoryStore::new(open_storage()?);
    let items = inventory.list()?;

    if items.is_empty() {
        info!("Inventory is empty. Run `hs-cli seed` to load the catalog.");
        return Ok(());
    }

    info!("{} item(s):", items.len());
    for item in items {
        info!(
            "  {}  {}  price={}  stock={}  rating={}{}",
            item.id,
            item.name,
            item.price,
            item.stock_quantity,
            item.rating,
            if item.featured { "  [featured]" } else { "" }
        );
    }
    Ok(())
}

/// Overwrite an item's stock count.
///
/// # Errors
///
/// Returns an error for an unknown id or a negative quantity; the snapshot
/// is unchanged in both cases.
pub fn set_quantity(id: &str, quantity: i64) -> Result<(), Box<dyn std::error::Error>> {
    let inventory = InventoryStore::new(open_storage()?);
    inventory.set_quantity(&ItemId::new(id), quantity)?;
    info!("Stock for {id} set to {quantity}");
    Ok(())
}

/// Add a new item.
///
/// # Errors
///
/// Returns an error if the price does not parse, the name is blank, or the
/// snapshot cannot be written.
pub fn add(
    name: &str,
    description: &str,
    price: &str,
    image: &str,
    category: &str,
    quantity: u32,
    featured: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let amount: Decimal = price
        .parse()
        .map_err(|_| InventoryCommandError::UnparsablePrice(price.to_owned()))?;
    let price = Price::new(amount).map_err(InventoryCommandError::InvalidPrice)?;

    let inventory = InventoryStore::new(open_storage()?);
    let created = inventory.add(NewItem {
        name: name.to_owned(),
        description: description.to_owned(),
        price,
        image_url: image.to_owned(),
        category_id: CategoryId::new(category),
        stock_quantity: quantity,
        rating: None,
        featured: featured.then_some(true),
    })?;

    info!("Created item {} ({})", created.id, created.name);
    Ok(())
}

/// Remove an item.
///
/// # Errors
///
/// Returns an error for an unknown id.
pub fn remove(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let inventory = InventoryStore::new(open_storage()?);
    inventory.remove(&ItemId::new(id))?;
    info!("Removed item {id}");
    Ok(())
}

/// Set or clear an item's featured flag.
///
/// # Errors
///
/// Returns an error for an unknown id.
pub fn feature(id: &str, featured: bool) -> Result<(), Box<dyn std::error::Error>> {
    let inventory = InventoryStore::new(open_storage()?);
    inventory.set_featured(&ItemId::new(id), featured)?;
    info!(
        "Item {id} is {} featured",
        if featured { "now" } else { "no longer" }
    );
    Ok(())
}
