//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Home page
//! GET  /shop            - Shop listing (category/color/sort query params)
//! GET  /cart            - Demo cart page
//! POST /locale          - Switch the active locale
//!
//! # Auth (simulated)
//! GET  /auth/login      - Login page
//! POST /auth/login      - Login action
//! GET  /auth/signup     - Signup page
//! POST /auth/signup     - Signup action
//!
//! # Health
//! GET  /health          - Liveness check
//! GET  /health/ready    - Readiness check (verifies database connectivity)
//! ```

pub mod auth;
pub mod cart;
pub mod home;
pub mod locale;
pub mod shop;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tower_sessions::Session;

use crate::catalog::DEMO_CART;
use crate::locale::messages::NavbarMessages;
use crate::locale::{Locale, LocaleId, LocaleSession};
use crate::state::AppState;

/// Session key holding the active locale id.
pub(crate) const ACTIVE_LOCALE_KEY: &str = "shopsphere.locale";

/// Materialize the browsing session's locale state.
///
/// A missing or unreadable session value falls back to the default locale;
/// only an explicit out-of-domain id (which the locale route rejects before
/// it ever reaches the session) is an error.
pub(crate) async fn locale_session(session: &Session) -> LocaleSession {
    let active = session
        .get::<LocaleId>(ACTIVE_LOCALE_KEY)
        .await
        .ok()
        .flatten()
        .unwrap_or_default();
    LocaleSession::new(active)
}

/// A locale choice in the navbar selector.
#[derive(Clone)]
pub struct LocaleOptionView {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Shared page chrome: brand, navigation labels, cart badge, and the locale
/// selector. Built per request from the active locale.
#[derive(Clone)]
pub struct Chrome {
    pub lang: &'static str,
    pub brand: &'static str,
    pub navbar: &'static NavbarMessages,
    pub cart_count: u32,
    pub locale_options: Vec<LocaleOptionView>,
    /// Where the locale selector redirects back to after switching.
    pub current_path: &'static str,
}

impl Chrome {
    /// Build the chrome for a page under `locale`.
    #[must_use]
    pub fn new(locale: &'static Locale, current_path: &'static str) -> Self {
        let locale_options = LocaleId::ALL
            .into_iter()
            .map(|id| LocaleOptionView {
                id: id.as_str(),
                label: id.resolve().label,
                active: id == locale.id,
            })
            .collect();

        Self {
            lang: locale.id.as_str(),
            brand: "ShopSphere",
            navbar: &locale.messages.navbar,
            cart_count: DEMO_CART.iter().map(|seed| seed.quantity).sum(),
            locale_options,
            current_path,
        }
    }
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/signup", get(auth::signup_page).post(auth::signup))
}

/// Create the health routes router.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Shop listing
        .route("/shop", get(shop::index))
        // Demo cart
        .route("/cart", get(cart::show))
        // Locale switching
        .route("/locale", post(locale::set_locale))
        // Auth routes (simulated backend)
        .nest("/auth", auth_routes())
        // Health checks
        .merge(health_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
