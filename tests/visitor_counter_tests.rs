mod common;

use axum::http::StatusCode;
use common::*;
use std::fs;

#[tokio::test]
async fn sequential_public_views_add_exactly_one_each() {
    let site = test_site().await;
    let count_path = site.dir.path().join("visitor_count.txt");

    for uri in ["/", "/about", "/products", "/blog", "/faq"] {
        let resp = get(&site, uri, None).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
    }

    assert_eq!(fs::read_to_string(&count_path).expect("count file"), "5");
}

#[tokio::test]
async fn admin_namespace_requests_are_not_counted() {
    let site = test_site().await;
    let count_path = site.dir.path().join("visitor_count.txt");

    get(&site, "/", None).await;
    assert_eq!(fs::read_to_string(&count_path).expect("count file"), "1");

    let session = login(&site).await; // POST /login is a public path and counts
    get(&site, "/admin", Some(&session)).await;
    get(&site, "/admin/messages", Some(&session)).await;
    get(&site, "/admin/products", Some(&session)).await;

    assert_eq!(
        fs::read_to_string(&count_path).expect("count file"),
        "2",
        "admin page views must not move the counter"
    );
}

#[tokio::test]
async fn counter_survives_across_router_instances() {
    let site = test_site().await;
    get(&site, "/", None).await;
    get(&site, "/", None).await;

    // a second router over the same files keeps counting where it left off
    let app = badia_site::site_router(site.state.clone());
    let resp = tower::ServiceExt::oneshot(
        app,
        axum::http::Request::builder()
            .uri("/")
            .body(axum::body::Body::empty())
            .expect("request"),
    )
    .await
    .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let count_path = site.dir.path().join("visitor_count.txt");
    assert_eq!(fs::read_to_string(&count_path).expect("count file"), "3");
}
