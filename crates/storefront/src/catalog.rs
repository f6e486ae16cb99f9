//! Bundled seed catalog.
//!
//! The static product and category data a fresh shop is seeded from, in the
//! same shape as the inventory snapshot: each seed item's stock count becomes
//! the initial quantity-on-hand when
//! [`InventoryStore::initialize`](crate::db::InventoryStore::initialize)
//! runs for the first time.

use rust_decimal::Decimal;

use honeyshop_core::{CategoryId, ItemId, Price, Rating};

use crate::models::{Category, Item};

/// Seed item ids that start out featured on the landing page.
const FEATURED_IDS: &[&str] = &["h1", "i1", "c1", "g1"];

fn item(
    id: &str,
    name: &str,
    description: &str,
    cents: i64,
    category: &str,
    rating_tenths: i64,
    stock: u32,
) -> Item {
    Item {
        id: ItemId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Price::from_cents(cents),
        image_url: format!("/images/products/{id}.jpg"),
        category_id: CategoryId::new(category),
        rating: Rating::new(Decimal::new(rating_tenths, 1)).unwrap_or(Rating::NEUTRAL),
        stock_quantity: stock,
        featured: FEATURED_IDS.contains(&id),
    }
}

/// The browsing categories shown on the landing page.
#[must_use]
pub fn categories() -> Vec<Category> {
    [
        (
            "raw-honey",
            "Raw Honey",
            "Unfiltered single-origin honey, straight from the extractor",
        ),
        (
            "infused",
            "Infused Honey",
            "Honey infused with herbs, spices and fruit",
        ),
        (
            "comb",
            "Comb & Chunk",
            "Cut comb and chunk honey, exactly as the bees built it",
        ),
        (
            "gifts",
            "Gift Sets",
            "Sampler boxes and gifts for honey lovers",
        ),
        (
            "apiary",
            "Apiary Goods",
            "Beeswax, candles and goods from around the hive",
        ),
    ]
    .into_iter()
    .map(|(id, name, description)| Category {
        id: CategoryId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        image_url: format!("/images/categories/{id}.jpg"),
    })
    .collect()
}

/// The seed products a fresh inventory is initialized from.
#[must_use]
pub fn seed_items() -> Vec<Item> {
    vec![
        item(
            "h1",
            "Wildflower Honey",
            "Raw wildflower honey from summer meadows, 340g jar.",
            1_250,
            "raw-honey",
            47,
            24,
        ),
        item(
            "h2",
            "Clover Honey",
            "Mild, light clover honey, the everyday favourite, 340g jar.",
            950,
            "raw-honey",
            45,
            40,
        ),
        item(
            "h3",
            "Buckwheat Honey",
            "Dark, malty buckwheat honey with a molasses finish, 340g jar.",
            1_450,
            "raw-honey",
            46,
            12,
        ),
        item(
            "i1",
            "Lavender Infused Honey",
            "Clover honey infused with culinary lavender, 250g jar.",
            1_350,
            "infused",
            44,
            18,
        ),
        item(
            "i2",
            "Chili Infused Honey",
            "Hot honey with bird's eye chili, built for pizza, 250g jar.",
            1_300,
            "infused",
            48,
            20,
        ),
        item(
            "c1",
            "Cut Comb Square",
            "A full square of capped comb in a clear box, about 300g.",
            1_850,
            "comb",
            49,
            8,
        ),
        item(
            "c2",
            "Chunk Honey Jar",
            "A piece of comb suspended in liquid wildflower honey, 450g.",
            1_650,
            "comb",
            46,
            10,
        ),
        item(
            "g1",
            "Taster Trio",
            "Three 120g jars: wildflower, buckwheat and lavender.",
            2_400,
            "gifts",
            47,
            15,
        ),
        item(
            "g2",
            "Breakfast Gift Box",
            "A 340g jar, a wooden dipper and a linen napkin, boxed.",
            2_950,
            "gifts",
            43,
            6,
        ),
        item(
            "a1",
            "Beeswax Candle Pair",
            "Two hand-rolled beeswax taper candles, 20cm.",
            1_100,
            "apiary",
            46,
            30,
        ),
        item(
            "a2",
            "Wooden Honey Dipper",
            "Beechwood dipper, the right tool for the jar.",
            450,
            "apiary",
            42,
            50,
        ),
    ]
}
