//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::featured_products;
use crate::catalog::view::{ProductCard, product_cards};
use crate::filters;
use crate::locale::messages::{HomeMessages, ShopMessages};
use crate::routes::{Chrome, locale_session};

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: Chrome,
    /// Home page copy for the active locale.
    pub home: &'static HomeMessages,
    /// Shop copy is needed for the product-card labels (badge, CTA).
    pub shop: &'static ShopMessages,
    /// Featured products as locale-resolved cards.
    pub featured: Vec<ProductCard>,
}

/// Display the home page.
#[instrument(skip(session))]
pub async fn home(session: Session) -> impl IntoResponse {
    let locale = locale_session(&session).await.locale();

    HomeTemplate {
        chrome: Chrome::new(locale, "/"),
        home: &locale.messages.home,
        shop: &locale.messages.shop,
        featured: product_cards(&featured_products(), locale),
    }
}
