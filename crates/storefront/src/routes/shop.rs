//! Shop listing route handler.
//!
//! The filter/sort selection is ephemeral per-view state carried in query
//! parameters; absent parameters keep their defaults and "Reset" is a link
//! back to the bare listing, which restores all three defaults at once.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::Query;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::products;
use crate::catalog::view::{
    ProductCard, Selection, SelectionQuery, filter_and_sort, product_cards,
};
use crate::error::Result;
use crate::filters;
use crate::locale::messages::ShopMessages;
use crate::routes::{Chrome, locale_session};

/// A category or color filter pill.
pub struct FilterPillView {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// A sort choice in the sort select.
pub struct SortChoiceView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Shop listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop.html")]
pub struct ShopTemplate {
    pub chrome: Chrome,
    /// Shop page copy for the active locale.
    pub shop: &'static ShopMessages,
    /// Description of the active category choice.
    pub active_category_description: &'static str,
    pub category_pills: Vec<FilterPillView>,
    pub color_pills: Vec<FilterPillView>,
    pub sort_choices: Vec<SortChoiceView>,
    /// Hidden inputs so the sort form preserves the active filters.
    pub sort_form_category: &'static str,
    pub sort_form_color: &'static str,
    pub reset_href: &'static str,
    pub count: usize,
    pub cards: Vec<ProductCard>,
}

/// Query-string link for a selection.
fn shop_href(selection: &Selection) -> String {
    format!(
        "/shop?category={}&color={}&sort={}",
        selection.category.as_query(),
        selection.color.as_query(),
        selection.sort.as_query()
    )
}

/// Display the shop listing.
///
/// # Errors
///
/// Returns a `BadRequest` for category, color, or sort values outside the
/// closed sets; these are caller defects and are never silently replaced.
#[instrument(skip(session))]
pub async fn index(
    session: Session,
    Query(query): Query<SelectionQuery>,
) -> Result<ShopTemplate> {
    let locale = locale_session(&session).await.locale();
    let shop = &locale.messages.shop;

    let selection = Selection::try_from(&query)?;

    let items = filter_and_sort(products(), &selection);
    let cards = product_cards(&items, locale);

    let active_category_description = shop
        .categories
        .iter()
        .find(|option| option.filter == selection.category)
        .or_else(|| shop.categories.first())
        .map_or("", |option| option.description);

    let category_pills = shop
        .categories
        .iter()
        .map(|option| FilterPillView {
            label: option.label,
            href: shop_href(&Selection {
                category: option.filter,
                ..selection
            }),
            active: option.filter == selection.category,
        })
        .collect();

    let color_pills = shop
        .color_options
        .iter()
        .map(|option| FilterPillView {
            label: option.label,
            href: shop_href(&Selection {
                color: option.filter,
                ..selection
            }),
            active: option.filter == selection.color,
        })
        .collect();

    let sort_choices = shop
        .sort_options
        .iter()
        .map(|option| SortChoiceView {
            value: option.sort.as_query(),
            label: option.label,
            selected: option.sort == selection.sort,
        })
        .collect();

    Ok(ShopTemplate {
        chrome: Chrome::new(locale, "/shop"),
        shop,
        active_category_description,
        category_pills,
        color_pills,
        sort_choices,
        sort_form_category: selection.category.as_query(),
        sort_form_color: selection.color.as_query(),
        reset_href: "/shop",
        count: cards.len(),
        cards,
    })
}
