//! Category display records.

use serde::{Deserialize, Serialize};

use honeyshop_core::CategoryId;

/// A browsing category.
///
/// Static display metadata shipped with the seed catalog; categories are not
/// stored in the inventory snapshot and have no CRUD surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Opaque identifier referenced by [`Item::category_id`](super::Item).
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Image reference for the category card.
    #[serde(rename = "image")]
    pub image_url: String,
}
