//! Catalog/inventory item records.

use serde::{Deserialize, Serialize};

use honeyshop_core::{CategoryId, ItemId, Price, Rating};

/// A sellable item: catalog metadata plus the authoritative stock count.
///
/// Serialized field names match the persisted snapshot shape: the stock
/// count is stored as `quantity`, the image URL as `image` and the category
/// reference as `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque unique identifier, stable for the lifetime of the item.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Image reference for display.
    #[serde(rename = "image")]
    pub image_url: String,
    /// Category this item is listed under. Display metadata only; no
    /// referential integrity against the category list is enforced.
    #[serde(rename = "category")]
    pub category_id: CategoryId,
    /// Average rating on the 0-5 scale.
    pub rating: Rating,
    /// Authoritative count of sellable units. Never negative.
    #[serde(rename = "quantity")]
    pub stock_quantity: u32,
    /// Whether the item is featured on the landing page. Independent of
    /// stock.
    #[serde(default)]
    pub featured: bool,
}

/// Fields for an admin "add product" action.
///
/// The store assigns the id and applies defaults for the optional fields:
/// an unspecified rating becomes [`Rating::NEUTRAL`], an unspecified
/// `featured` becomes `false`.
#[derive(Debug, Clone)]
pub struct NewItem {
    /// Display name. Must not be blank.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Image reference for display.
    pub image_url: String,
    /// Category to list the item under.
    pub category_id: CategoryId,
    /// Initial stock count.
    pub stock_quantity: u32,
    /// Initial rating, if the item already has one.
    pub rating: Option<Rating>,
    /// Whether to feature the item immediately.
    pub featured: Option<bool>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item {
            id: ItemId::new("h1"),
            name: "Wildflower Honey".to_owned(),
            description: "Raw wildflower honey, 340g jar.".to_owned(),
            price: Price::from_cents(1_250),
            image_url: "/images/wildflower.jpg".to_owned(),
            category_id: CategoryId::new("raw-honey"),
            rating: Rating::NEUTRAL,
            stock_quantity: 12,
            featured: true,
        }
    }

    #[test]
    fn test_snapshot_field_names() {
        let json = serde_json::to_value(sample_item()).unwrap();
        assert!(json.get("image").is_some());
        assert!(json.get("category").is_some());
        assert!(json.get("quantity").is_some());
        assert!(json.get("image_url").is_none());
        assert!(json.get("stock_quantity").is_none());
    }

    #[test]
    fn test_featured_defaults_false_on_decode() {
        let json = r#"{
            "id": "h2",
            "name": "Clover Honey",
            "description": "Mild clover honey.",
            "price": "8.00",
            "image": "/images/clover.jpg",
            "category": "raw-honey",
            "rating": "4.5",
            "quantity": 3
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(!item.featured);
        assert_eq!(item.stock_quantity, 3);
    }

    #[test]
    fn test_roundtrip() {
        let item = sample_item();
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
