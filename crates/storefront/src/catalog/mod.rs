//! Static in-memory product catalog.
//!
//! The catalog is seeded once at process start and never mutated. There is no
//! loading step and no I/O; every consumer reads the same `'static` records.

pub mod view;

use std::sync::LazyLock;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use shopsphere_core::{CurrencyCode, Price, ProductId, StockStatus};

/// Product category. A closed set; the shop page's "all" choice is a filter
/// sentinel, not a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Outerwear,
    Bags,
    Dresses,
    Essentials,
    Travel,
    Accessories,
    Sweaters,
}

impl Category {
    /// The stable identifier used in URLs and as the untranslated fallback label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Outerwear => "outerwear",
            Self::Bags => "bags",
            Self::Dresses => "dresses",
            Self::Essentials => "essentials",
            Self::Travel => "travel",
            Self::Accessories => "accessories",
            Self::Sweaters => "sweaters",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "outerwear" => Ok(Self::Outerwear),
            "bags" => Ok(Self::Bags),
            "dresses" => Ok(Self::Dresses),
            "essentials" => Ok(Self::Essentials),
            "travel" => Ok(Self::Travel),
            "accessories" => Ok(Self::Accessories),
            "sweaters" => Ok(Self::Sweaters),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

/// Product color. Matching is order-irrelevant; display order follows the
/// product's own color list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cognac,
    Black,
    Fog,
    Coal,
    Steel,
    Tan,
    Stone,
    Olive,
    Jet,
    Pearl,
    Umber,
    Charcoal,
    Ivory,
    Sable,
    Midnight,
    Alpine,
    Sand,
    Slate,
}

impl Color {
    /// Every color in the catalog, in the order the shop filter presents them.
    pub const ALL: [Self; 18] = [
        Self::Cognac,
        Self::Black,
        Self::Fog,
        Self::Coal,
        Self::Steel,
        Self::Tan,
        Self::Stone,
        Self::Olive,
        Self::Jet,
        Self::Pearl,
        Self::Umber,
        Self::Charcoal,
        Self::Ivory,
        Self::Sable,
        Self::Midnight,
        Self::Alpine,
        Self::Sand,
        Self::Slate,
    ];

    /// The canonical English name, used in URLs and as the untranslated
    /// fallback label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cognac => "Cognac",
            Self::Black => "Black",
            Self::Fog => "Fog",
            Self::Coal => "Coal",
            Self::Steel => "Steel",
            Self::Tan => "Tan",
            Self::Stone => "Stone",
            Self::Olive => "Olive",
            Self::Jet => "Jet",
            Self::Pearl => "Pearl",
            Self::Umber => "Umber",
            Self::Charcoal => "Charcoal",
            Self::Ivory => "Ivory",
            Self::Sable => "Sable",
            Self::Midnight => "Midnight",
            Self::Alpine => "Alpine",
            Self::Sand => "Sand",
            Self::Slate => "Slate",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| format!("invalid color: {s}"))
    }
}

/// A catalog product.
///
/// Base prices are denominated in the reference currency (USD); conversion
/// into the active display currency happens in the locale layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub description: &'static str,
    /// Base price, denominated in the reference currency.
    pub price: Price,
    pub category: Category,
    /// Non-empty; display order preserved.
    pub colors: &'static [Color],
    pub is_new: bool,
    /// 0.0 to 5.0, one decimal place.
    pub rating: Decimal,
    pub reviews: u32,
    pub image_alt: &'static str,
    /// Used only for recency ordering.
    pub release_date: NaiveDate,
}

/// Products highlighted on the home page, in display order.
pub const FEATURED_PRODUCT_IDS: [ProductId; 4] = [
    ProductId::new(1),
    ProductId::new(2),
    ProductId::new(3),
    ProductId::new(4),
];

fn released(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed release date")
}

static CATALOG: LazyLock<[Product; 9]> = LazyLock::new(|| {
    [
        Product {
            id: ProductId::new(1),
            name: "Everyday Leather Tote",
            description: "Structured carryall handcrafted from eco-tanned Italian leather.",
            price: Price::new(Decimal::from(220), CurrencyCode::USD),
            category: Category::Bags,
            colors: &[Color::Cognac, Color::Black],
            is_new: false,
            rating: Decimal::new(48, 1),
            reviews: 164,
            image_alt: "Brown leather tote bag on a white backdrop",
            release_date: released(2024, 7, 1),
        },
        Product {
            id: ProductId::new(2),
            name: "CloudSoft Hoodie",
            description: "Plush fleece hoodie with brushed interior and minimalist seams.",
            price: Price::new(Decimal::from(96), CurrencyCode::USD),
            category: Category::Sweaters,
            colors: &[Color::Fog, Color::Coal],
            is_new: false,
            rating: Decimal::new(47, 1),
            reviews: 287,
            image_alt: "Neutral hoodie folded on a table",
            release_date: released(2024, 8, 18),
        },
        Product {
            id: ProductId::new(3),
            name: "Minimalist Watch",
            description: "Brushed steel case with vegetable-tanned leather strap.",
            price: Price::new(Decimal::from(185), CurrencyCode::USD),
            category: Category::Accessories,
            colors: &[Color::Steel, Color::Tan],
            is_new: false,
            rating: Decimal::new(49, 1),
            reviews: 92,
            image_alt: "Stainless watch with tan strap resting on marble",
            release_date: released(2024, 6, 12),
        },
        Product {
            id: ProductId::new(4),
            name: "Meridian Trench Coat",
            description: "Water-resistant cotton blend trench with detachable belt.",
            price: Price::new(Decimal::from(298), CurrencyCode::USD),
            category: Category::Outerwear,
            colors: &[Color::Stone, Color::Olive],
            is_new: true,
            rating: Decimal::new(46, 1),
            reviews: 58,
            image_alt: "Lightweight trench coat hung on hook",
            release_date: released(2024, 9, 10),
        },
        Product {
            id: ProductId::new(5),
            name: "Sculpt Knit Midi Dress",
            description: "Contour-knit silhouette with subtle rib texture and stretch.",
            price: Price::new(Decimal::from(168), CurrencyCode::USD),
            category: Category::Dresses,
            colors: &[Color::Jet, Color::Pearl],
            is_new: true,
            rating: Decimal::new(45, 1),
            reviews: 74,
            image_alt: "Black knit dress displayed on mannequin",
            release_date: released(2024, 9, 4),
        },
        Product {
            id: ProductId::new(6),
            name: "Weekender Duffle",
            description: "Carry-on compliant duffle with padded laptop sleeve and pockets.",
            price: Price::new(Decimal::from(240), CurrencyCode::USD),
            category: Category::Travel,
            colors: &[Color::Umber, Color::Charcoal],
            is_new: false,
            rating: Decimal::new(48, 1),
            reviews: 133,
            image_alt: "Canvas duffle bag leaning against chair",
            release_date: released(2024, 5, 28),
        },
        Product {
            id: ProductId::new(7),
            name: "Studio Ribbed Tank",
            description: "Second-skin ribbed tank in breathable modal blend.",
            price: Price::new(Decimal::from(42), CurrencyCode::USD),
            category: Category::Essentials,
            colors: &[Color::Ivory, Color::Sable],
            is_new: false,
            rating: Decimal::new(44, 1),
            reviews: 211,
            image_alt: "Ribbed tank tops stacked together",
            release_date: released(2024, 7, 21),
        },
        Product {
            id: ProductId::new(8),
            name: "Peak Puffer Vest",
            description: "Lightweight recycled fill vest designed for layering.",
            price: Price::new(Decimal::from(156), CurrencyCode::USD),
            category: Category::Outerwear,
            colors: &[Color::Midnight, Color::Alpine],
            is_new: false,
            rating: Decimal::new(46, 1),
            reviews: 118,
            image_alt: "Puffer vest draped over chair",
            release_date: released(2024, 8, 2),
        },
        Product {
            id: ProductId::new(9),
            name: "Voyage Crossbody",
            description: "Hands-free crossbody with adjustable strap and hidden pocket.",
            price: Price::new(Decimal::from(128), CurrencyCode::USD),
            category: Category::Bags,
            colors: &[Color::Sand, Color::Slate],
            is_new: true,
            rating: Decimal::new(47, 1),
            reviews: 96,
            image_alt: "Minimal crossbody bag photographed on stool",
            release_date: released(2024, 9, 15),
        },
    ]
});

/// The full catalog in seed order.
#[must_use]
pub fn products() -> &'static [Product] {
    &*CATALOG
}

/// Look up a product by id.
#[must_use]
pub fn product_by_id(id: ProductId) -> Option<&'static Product> {
    products().iter().find(|product| product.id == id)
}

/// Featured products in the order of [`FEATURED_PRODUCT_IDS`]. Ids without a
/// catalog record are skipped.
#[must_use]
pub fn featured_products() -> Vec<&'static Product> {
    FEATURED_PRODUCT_IDS
        .into_iter()
        .filter_map(product_by_id)
        .collect()
}

/// A demo cart line, joined against the catalog at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSeed {
    pub product_id: ProductId,
    pub quantity: u32,
    pub color: Color,
    pub size: &'static str,
    pub status: StockStatus,
}

/// Seed lines for the demo cart. Cart state is not persisted anywhere.
pub const DEMO_CART: [CartSeed; 3] = [
    CartSeed {
        product_id: ProductId::new(1),
        quantity: 1,
        color: Color::Cognac,
        size: "One size",
        status: StockStatus::InStock,
    },
    CartSeed {
        product_id: ProductId::new(2),
        quantity: 2,
        color: Color::Fog,
        size: "M",
        status: StockStatus::LowStock,
    },
    CartSeed {
        product_id: ProductId::new(3),
        quantity: 1,
        color: Color::Tan,
        size: "40 mm",
        status: StockStatus::InStock,
    },
];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_nine_unique_products() {
        let mut ids: Vec<_> = products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 9);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn test_every_product_has_colors() {
        for product in products() {
            assert!(!product.colors.is_empty(), "{} has no colors", product.name);
        }
    }

    #[test]
    fn test_ratings_within_range() {
        for product in products() {
            assert!(product.rating >= Decimal::ZERO);
            assert!(product.rating <= Decimal::from(5));
        }
    }

    #[test]
    fn test_featured_products_resolve_in_order() {
        let featured = featured_products();
        assert_eq!(featured.len(), 4);
        let ids: Vec<_> = featured.iter().map(|p| p.id).collect();
        assert_eq!(ids, FEATURED_PRODUCT_IDS.to_vec());
    }

    #[test]
    fn test_product_by_id_miss() {
        assert!(product_by_id(ProductId::new(999)).is_none());
    }

    #[test]
    fn test_demo_cart_lines_resolve() {
        for seed in DEMO_CART {
            let product = product_by_id(seed.product_id).unwrap();
            assert!(product.colors.contains(&seed.color));
        }
    }

    #[test]
    fn test_color_round_trip() {
        for color in Color::ALL {
            let parsed: Color = color.as_str().parse().unwrap();
            assert_eq!(parsed, color);
        }
        assert!("Chartreuse".parse::<Color>().is_err());
    }

    #[test]
    fn test_category_round_trip() {
        let parsed: Category = "outerwear".parse().unwrap();
        assert_eq!(parsed, Category::Outerwear);
        assert!("hats".parse::<Category>().is_err());
    }
}
