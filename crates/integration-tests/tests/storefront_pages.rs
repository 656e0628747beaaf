//! Page rendering tests against the real router.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use shopsphere_integration_tests::build_app;

async fn get(app: &Router, uri: &str) -> Response<axum::body::Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: Response<axum::body::Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn home_renders_featured_products() {
    let app = build_app();
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Featured products"));
    assert!(body.contains("Everyday Leather Tote"));
    assert!(body.contains("$220.00"));
    assert!(body.contains("4.8 rating | 164 reviews"));
}

#[tokio::test]
async fn shop_lists_full_catalog_by_default() {
    let app = build_app();
    let body = body_string(get(&app, "/shop").await).await;

    assert!(body.contains("9 styles available"));
    assert!(body.contains("Everyday Leather Tote"));
    assert!(body.contains("Voyage Crossbody"));
}

#[tokio::test]
async fn shop_filters_by_category() {
    let app = build_app();
    let body = body_string(get(&app, "/shop?category=bags").await).await;

    assert!(body.contains("2 styles available"));
    assert!(body.contains("Everyday Leather Tote"));
    assert!(body.contains("Voyage Crossbody"));
    assert!(!body.contains("CloudSoft Hoodie"));
}

#[tokio::test]
async fn shop_combines_category_and_color_filters() {
    let app = build_app();
    let body = body_string(get(&app, "/shop?category=outerwear&color=Olive").await).await;

    assert!(body.contains("1 styles available"));
    assert!(body.contains("Meridian Trench Coat"));
    assert!(!body.contains("Peak Puffer Vest"));
}

#[tokio::test]
async fn shop_sorts_by_price_ascending() {
    let app = build_app();
    let body = body_string(get(&app, "/shop?sort=price-low").await).await;

    let cheapest = body.find("Studio Ribbed Tank").unwrap();
    let priciest = body.find("Meridian Trench Coat").unwrap();
    assert!(cheapest < priciest);
}

#[tokio::test]
async fn shop_renders_empty_state() {
    let app = build_app();
    let body = body_string(get(&app, "/shop?category=dresses&color=Cognac").await).await;

    assert!(body.contains("0 styles available"));
    assert!(body.contains("No styles match your filters."));
}

#[tokio::test]
async fn shop_rejects_unknown_sort_key() {
    let app = build_app();
    let response = get(&app, "/shop?sort=price-descending").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn shop_rejects_unknown_category() {
    let app = build_app();
    let response = get(&app, "/shop?category=hats").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cart_renders_lines_and_totals() {
    let app = build_app();
    let body = body_string(get(&app, "/cart").await).await;

    assert!(body.contains("Ready to check out?"));
    assert!(body.contains("Arrives in 3-5 business days"));
    // Subtotal 597, plus 12 shipping and 48 tax, minus 30 member savings.
    assert!(body.contains("$597.00"));
    assert!(body.contains("$627.00"));
}

#[tokio::test]
async fn health_endpoint_is_ok() {
    let app = build_app();
    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}
