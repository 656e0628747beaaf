//! Integration tests for ShopSphere.
//!
//! The tests drive the real storefront router through
//! `tower::ServiceExt::oneshot`. The database pool is created lazily and no
//! tested path acquires a connection, so no live database is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopsphere-integration-tests
//! ```

use std::time::Duration;

use axum::Router;
use secrecy::SecretString;

use shopsphere_storefront::config::StorefrontConfig;
use shopsphere_storefront::state::AppState;
use shopsphere_storefront::{db, middleware, routes};

/// Configuration for router-level tests: zero simulated auth latency, no
/// Sentry, and a database URL that is never actually connected to.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        database_url: SecretString::from("postgres://postgres@127.0.0.1/shopsphere_test"),
        host: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 0,
        auth_delay: Duration::ZERO,
        sentry_dsn: None,
    }
}

/// Build the full application router with session support, backed by a
/// lazily-connected pool.
///
/// # Panics
///
/// Panics if the (static) test database URL cannot be parsed.
#[must_use]
pub fn build_app() -> Router {
    let config = test_config();
    let pool = db::create_lazy_pool(&config.database_url).expect("lazy pool from static URL");
    let state = AppState::new(config, pool);

    Router::new()
        .merge(routes::routes())
        .layer(middleware::create_session_layer())
        .with_state(state)
}
