//! Filter, sort, and card assembly for the shop listing.
//!
//! The pipeline is synchronous and infallible: an empty result is a valid
//! outcome, distinct from an error. Parsing a filter or sort key from an
//! out-of-domain string *is* an error ([`SelectionParseError`]) and is
//! surfaced loudly by the route layer rather than silently substituted.

use serde::Deserialize;

use shopsphere_core::ProductId;

use super::{Category, Color, Product};
use crate::locale::Locale;

/// Category filter for the shop listing. `All` is the "no filter" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether `product` passes this filter.
    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == category,
        }
    }

    /// The query-string value for this filter.
    #[must_use]
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse::<Category>()
            .map(Self::Only)
            .map_err(|_| SelectionParseError::Category(s.to_owned()))
    }
}

/// Color filter for the shop listing. `All` is the "no filter" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorFilter {
    #[default]
    All,
    Only(Color),
}

impl ColorFilter {
    /// Whether `product` passes this filter. A product matches when its color
    /// set contains the filtered color; ordering within the set is irrelevant.
    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(color) => product.colors.contains(&color),
        }
    }

    /// The query-string value for this filter.
    #[must_use]
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(color) => color.as_str(),
        }
    }
}

impl std::str::FromStr for ColorFilter {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse::<Color>()
            .map(Self::Only)
            .map_err(|_| SelectionParseError::Color(s.to_owned()))
    }
}

/// Sort order for the shop listing. `Featured` preserves catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    Newest,
    TopRated,
}

impl SortKey {
    /// The query-string value for this sort key.
    #[must_use]
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLowToHigh => "price-low",
            Self::PriceHighToLow => "price-high",
            Self::Newest => "newest",
            Self::TopRated => "rating",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "price-low" => Ok(Self::PriceLowToHigh),
            "price-high" => Ok(Self::PriceHighToLow),
            "newest" => Ok(Self::Newest),
            "rating" => Ok(Self::TopRated),
            _ => Err(SelectionParseError::SortKey(s.to_owned())),
        }
    }
}

/// A caller passed a filter or sort value outside the closed set.
///
/// This is a precondition violation, not a recoverable runtime condition: the
/// valid values are statically known, so an unknown one indicates a defect in
/// the caller and must propagate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionParseError {
    #[error("unknown category filter: {0}")]
    Category(String),
    #[error("unknown color filter: {0}")]
    Color(String),
    #[error("unknown sort key: {0}")]
    SortKey(String),
}

/// The shop page's ephemeral filter/sort state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub category: CategoryFilter,
    pub color: ColorFilter,
    pub sort: SortKey,
}

impl Selection {
    /// Restore category, color, and sort to their defaults.
    ///
    /// All three change in a single assignment; a reader never observes a
    /// partially reset selection.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Query parameters accepted by the shop listing. Absent parameters keep
/// their defaults; present ones must parse into the closed sets.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionQuery {
    pub category: Option<String>,
    pub color: Option<String>,
    pub sort: Option<String>,
}

impl TryFrom<&SelectionQuery> for Selection {
    type Error = SelectionParseError;

    fn try_from(query: &SelectionQuery) -> Result<Self, Self::Error> {
        let mut selection = Self::default();
        if let Some(category) = query.category.as_deref() {
            selection.category = category.parse()?;
        }
        if let Some(color) = query.color.as_deref() {
            selection.color = color.parse()?;
        }
        if let Some(sort) = query.sort.as_deref() {
            selection.sort = sort.parse()?;
        }
        Ok(selection)
    }
}

/// Filter the catalog by the selection's category and color (conjunctive),
/// then order it by the selection's sort key.
///
/// Sorting is stable: products comparing equal under the sort key keep their
/// relative catalog order. `Featured` applies no comparator at all.
#[must_use]
pub fn filter_and_sort<'a>(products: &'a [Product], selection: &Selection) -> Vec<&'a Product> {
    let mut items: Vec<&Product> = products
        .iter()
        .filter(|product| selection.category.matches(product) && selection.color.matches(product))
        .collect();

    match selection.sort {
        SortKey::Featured => {}
        SortKey::PriceLowToHigh => items.sort_by(|a, b| a.price.amount.cmp(&b.price.amount)),
        SortKey::PriceHighToLow => items.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
        SortKey::Newest => items.sort_by(|a, b| b.release_date.cmp(&a.release_date)),
        SortKey::TopRated => items.sort_by(|a, b| b.rating.cmp(&a.rating)),
    }

    items
}

/// A view-ready product card with all labels resolved against a locale.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: &'static str,
    pub description: &'static str,
    pub category_label: &'static str,
    /// Localized color names joined for display, in the product's order.
    pub color_labels: String,
    pub price: String,
    pub rating_summary: String,
    pub is_new: bool,
    pub image_alt: &'static str,
}

impl ProductCard {
    /// Assemble a card for `product` under `locale`.
    #[must_use]
    pub fn from_product(product: &'static Product, locale: &'static Locale) -> Self {
        let shop = &locale.messages.shop;
        let color_labels = product
            .colors
            .iter()
            .map(|color| shop.color_label(*color))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            category_label: shop.category_label(product.category),
            color_labels,
            price: locale.format_price(product.price.amount),
            rating_summary: (shop.rating_summary)(product.rating, product.reviews),
            is_new: product.is_new,
            image_alt: product.image_alt,
        }
    }
}

/// Assemble cards for an already filtered and sorted product list.
#[must_use]
pub fn product_cards(products: &[&'static Product], locale: &'static Locale) -> Vec<ProductCard> {
    products
        .iter()
        .copied()
        .map(|product| ProductCard::from_product(product, locale))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use shopsphere_core::{CurrencyCode, Price};

    use super::*;
    use crate::catalog::products;
    use crate::locale::LocaleId;

    fn names(items: &[&Product]) -> Vec<&'static str> {
        items.iter().map(|p| p.name).collect()
    }

    #[test]
    fn test_default_selection_is_identity() {
        let selection = Selection::default();
        let result = filter_and_sort(products(), &selection);
        assert_eq!(result.len(), products().len());
        for (got, expected) in result.iter().zip(products()) {
            assert_eq!(got.id, expected.id);
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut selection = Selection {
            category: CategoryFilter::Only(Category::Bags),
            color: ColorFilter::Only(Color::Olive),
            sort: SortKey::TopRated,
        };
        selection.reset();
        let once = selection;
        selection.reset();
        assert_eq!(selection, once);
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn test_category_filter_bags() {
        let selection = Selection {
            category: CategoryFilter::Only(Category::Bags),
            ..Selection::default()
        };
        let result = filter_and_sort(products(), &selection);
        assert_eq!(
            names(&result),
            ["Everyday Leather Tote", "Voyage Crossbody"]
        );
    }

    #[test]
    fn test_combined_category_and_color_filter() {
        let selection = Selection {
            category: CategoryFilter::Only(Category::Outerwear),
            color: ColorFilter::Only(Color::Olive),
            ..Selection::default()
        };
        let result = filter_and_sort(products(), &selection);
        assert_eq!(names(&result), ["Meridian Trench Coat"]);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let selection = Selection {
            category: CategoryFilter::Only(Category::Dresses),
            color: ColorFilter::Only(Color::Cognac),
            ..Selection::default()
        };
        let result = filter_and_sort(products(), &selection);
        assert!(result.is_empty());
    }

    #[test]
    fn test_price_ascending_extremes() {
        let selection = Selection {
            sort: SortKey::PriceLowToHigh,
            ..Selection::default()
        };
        let result = filter_and_sort(products(), &selection);
        assert_eq!(result.first().unwrap().price.amount, Decimal::from(42));
        assert_eq!(result.last().unwrap().price.amount, Decimal::from(298));
    }

    #[test]
    fn test_newest_sort_most_recent_first() {
        let selection = Selection {
            sort: SortKey::Newest,
            ..Selection::default()
        };
        let result = filter_and_sort(products(), &selection);
        assert_eq!(result.first().unwrap().name, "Voyage Crossbody");
        assert_eq!(result.last().unwrap().name, "Weekender Duffle");
    }

    #[test]
    fn test_top_rated_sort_is_stable_on_ties() {
        let selection = Selection {
            sort: SortKey::TopRated,
            ..Selection::default()
        };
        let result = filter_and_sort(products(), &selection);
        // Meridian Trench Coat and Peak Puffer Vest are both rated 4.6; the
        // trench precedes the vest in the catalog, so it must stay first.
        let trench = result
            .iter()
            .position(|p| p.name == "Meridian Trench Coat")
            .unwrap();
        let vest = result
            .iter()
            .position(|p| p.name == "Peak Puffer Vest")
            .unwrap();
        assert!(trench < vest);
    }

    #[test]
    fn test_price_sort_is_stable_on_equal_prices() {
        let twin = |id: i32, name: &'static str| Product {
            id: ProductId::new(id),
            name,
            description: "",
            price: Price::new(Decimal::from(100), CurrencyCode::USD),
            category: Category::Essentials,
            colors: &[Color::Ivory],
            is_new: false,
            rating: Decimal::new(40, 1),
            reviews: 1,
            image_alt: "",
            release_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let input = [twin(1, "first"), twin(2, "second"), twin(3, "third")];

        for sort in [SortKey::PriceLowToHigh, SortKey::PriceHighToLow] {
            let selection = Selection {
                sort,
                ..Selection::default()
            };
            let result = filter_and_sort(&input, &selection);
            assert_eq!(names(&result), ["first", "second", "third"]);
        }
    }

    #[test]
    fn test_selection_query_parsing() {
        let query = SelectionQuery {
            category: Some("bags".to_owned()),
            color: Some("Olive".to_owned()),
            sort: Some("price-high".to_owned()),
        };
        let selection = Selection::try_from(&query).unwrap();
        assert_eq!(selection.category, CategoryFilter::Only(Category::Bags));
        assert_eq!(selection.color, ColorFilter::Only(Color::Olive));
        assert_eq!(selection.sort, SortKey::PriceHighToLow);
    }

    #[test]
    fn test_selection_query_rejects_unknown_values() {
        let query = SelectionQuery {
            sort: Some("price-descending".to_owned()),
            ..SelectionQuery::default()
        };
        assert!(matches!(
            Selection::try_from(&query),
            Err(SelectionParseError::SortKey(_))
        ));

        let query = SelectionQuery {
            category: Some("hats".to_owned()),
            ..SelectionQuery::default()
        };
        assert!(matches!(
            Selection::try_from(&query),
            Err(SelectionParseError::Category(_))
        ));
    }

    #[test]
    fn test_product_card_resolves_localized_labels() {
        let locale = LocaleId::ThTh.resolve();
        let product = crate::catalog::product_by_id(ProductId::new(1)).unwrap();
        let card = ProductCard::from_product(product, locale);
        assert_eq!(card.category_label, "กระเป๋า");
        // The Thai bundle keeps Cognac untranslated; Black localizes.
        assert_eq!(card.color_labels, "Cognac, ดำ");
        assert!(card.rating_summary.contains("4.8"));
        assert!(card.rating_summary.contains("164"));
    }
}
