//! Cart route handler.
//!
//! The cart is a demo: seed lines joined against the static catalog at
//! render time. Nothing is persisted and there is no checkout.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use rust_decimal::Decimal;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::{DEMO_CART, product_by_id};
use crate::filters;
use crate::locale::Locale;
use crate::locale::messages::CartMessages;
use crate::routes::{Chrome, locale_session};

/// Flat-rate estimates in the reference currency, converted per locale at
/// render time.
const SHIPPING_ESTIMATE: i64 = 12;
const TAX_ESTIMATE: i64 = 48;
const MEMBER_DISCOUNT: i64 = 30;

/// Cart line display data for templates.
pub struct CartItemView {
    pub name: &'static str,
    pub description: &'static str,
    pub color_label: &'static str,
    pub size: &'static str,
    pub quantity: u32,
    pub status_label: &'static str,
    pub lead_time: Option<&'static str>,
    pub line_total: String,
}

/// Recommendation display data for templates.
pub struct RecommendationView {
    pub name: &'static str,
    pub price: String,
    pub image_alt: &'static str,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub chrome: Chrome,
    /// Cart page copy for the active locale.
    pub cart: &'static CartMessages,
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub shipping: String,
    pub estimated_tax: String,
    pub savings: String,
    pub total: String,
    pub recommendations: Vec<RecommendationView>,
}

/// Join the demo seeds against the catalog. Seed rows whose product id has
/// no catalog record are skipped rather than breaking the page.
fn cart_items(locale: &'static Locale) -> (Vec<CartItemView>, Decimal) {
    let cart = &locale.messages.cart;
    let mut subtotal = Decimal::ZERO;

    let items = DEMO_CART
        .iter()
        .filter_map(|seed| {
            let product = product_by_id(seed.product_id)?;
            let line_total = product.price.amount * Decimal::from(seed.quantity);
            subtotal += line_total;

            Some(CartItemView {
                name: product.name,
                description: product.description,
                color_label: locale.messages.shop.color_label(seed.color),
                size: seed.size,
                quantity: seed.quantity,
                status_label: cart.status_copy.label(seed.status),
                lead_time: cart.lead_time(seed.product_id),
                line_total: locale.format_price(line_total),
            })
        })
        .collect();

    (items, subtotal)
}

/// Display the cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let locale = locale_session(&session).await.locale();
    let cart = &locale.messages.cart;

    let (items, subtotal) = cart_items(locale);
    let total = subtotal + Decimal::from(SHIPPING_ESTIMATE) + Decimal::from(TAX_ESTIMATE)
        - Decimal::from(MEMBER_DISCOUNT);

    let recommendations = cart
        .recommendations
        .iter()
        .map(|rec| RecommendationView {
            name: rec.name,
            price: locale.format_price(Decimal::from(rec.price)),
            image_alt: rec.image_alt,
        })
        .collect();

    CartTemplate {
        chrome: Chrome::new(locale, "/cart"),
        cart,
        items,
        subtotal: locale.format_price(subtotal),
        shipping: locale.format_price(Decimal::from(SHIPPING_ESTIMATE)),
        estimated_tax: locale.format_price(Decimal::from(TAX_ESTIMATE)),
        savings: locale.format_price(Decimal::from(MEMBER_DISCOUNT)),
        total: locale.format_price(total),
        recommendations,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::locale::LocaleId;

    #[test]
    fn test_cart_items_join_and_subtotal() {
        let locale = LocaleId::EnUs.resolve();
        let (items, subtotal) = cart_items(locale);
        assert_eq!(items.len(), 3);
        // 220*1 + 96*2 + 185*1
        assert_eq!(subtotal, Decimal::from(597));
        assert_eq!(items[0].line_total, "$220.00");
        assert_eq!(items[1].line_total, "$192.00");
    }

    #[test]
    fn test_cart_items_localized() {
        let locale = LocaleId::ThTh.resolve();
        let (items, _) = cart_items(locale);
        assert_eq!(items[1].status_label, "ใกล้หมด");
        assert_eq!(items[1].lead_time, Some("จัดส่งภายใน 2-4 วันทำการ"));
        // 96 * 2 * 35 = 6720
        assert_eq!(items[1].line_total, "฿6,720");
    }
}
