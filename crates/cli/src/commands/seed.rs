//! Seed the inventory from the bundled catalog.
//!
//! Idempotent: when an inventory snapshot already exists it is left exactly
//! as it is, even if the catalog has changed since.

use tracing::info;

use honeyshop_storefront::{InventoryStore, catalog};

use super::open_storage;

/// Seed the inventory, then report what the snapshot holds.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the snapshot cannot
/// be read or written.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let storage = open_storage()?;
    let inventory = InventoryStore::new(storage);

    inventory.initialize(&catalog::seed_items())?;

    let items = inventory.list()?;
    info!("Seeding complete!");
    info!("  Items in inventory: {}", items.len());
    info!(
        "  Featured: {}",
        items.iter().filter(|item| item.featured).count()
    );

    Ok(())
}
