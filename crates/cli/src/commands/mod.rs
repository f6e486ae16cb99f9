//! CLI command implementations.

pub mod inventory;
pub mod seed;
pub mod user;

use honeyshop_storefront::{FileStorage, StorefrontConfig};

/// Open the file-backed storage at the configured data directory.
pub fn open_storage() -> Result<FileStorage, Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    Ok(FileStorage::new(config.data_dir))
}
