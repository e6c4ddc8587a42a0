mod common;

use axum::http::StatusCode;
use common::*;

fn product_form(name: &str, price: &str, file: Option<(&str, &[u8])>) -> Vec<u8> {
    multipart_body(
        &[("name", name), ("description", "desc"), ("price", price)],
        file.map(|(filename, data)| ("image", filename, data)),
    )
}

#[tokio::test]
async fn product_ids_count_up_from_one() {
    let site = test_site().await;
    let session = login(&site).await;

    let resp = post_multipart(
        &site,
        "/admin/products/add",
        product_form("Ajwa", "50", Some(("ajwa.png", b"png"))),
        Some(&session),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin/products");

    post_multipart(
        &site,
        "/admin/products/add",
        product_form("Khalas", "40", Some(("khalas.png", b"png"))),
        Some(&session),
    )
    .await;

    let products = site.state.products.list();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[1].id, 2);
    assert_eq!(products[0].name, "Ajwa");
    assert!(site.dir.path().join("img/ajwa.png").exists());

    // the catalog page shows both
    let body = body_text(get(&site, "/products", None).await).await;
    assert!(body.contains("Ajwa") && body.contains("Khalas"));
}

#[tokio::test]
async fn uppercase_extension_is_accepted_and_txt_is_rejected() {
    let site = test_site().await;
    let session = login(&site).await;

    let resp = post_multipart(
        &site,
        "/admin/products/add",
        product_form("Sukkari", "30", Some(("x.PNG", b"png"))),
        Some(&session),
    )
    .await;
    assert_eq!(location(&resp), "/admin/products");
    assert_eq!(site.state.products.list()[0].image, "x.PNG");

    let resp = post_multipart(
        &site,
        "/admin/products/add",
        product_form("Bad", "30", Some(("x.txt", b"text"))),
        Some(&session),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin/products/add");
    assert_eq!(site.state.products.len(), 1, "rejected upload must not create a product");
    assert!(!site.dir.path().join("img/x.txt").exists());
}

#[tokio::test]
async fn product_add_requires_an_image_and_a_sane_price() {
    let site = test_site().await;
    let session = login(&site).await;

    let resp = post_multipart(
        &site,
        "/admin/products/add",
        product_form("NoImage", "10", None),
        Some(&session),
    )
    .await;
    assert_eq!(location(&resp), "/admin/products/add");
    assert!(site.state.products.is_empty());

    let resp = post_multipart(
        &site,
        "/admin/products/add",
        product_form("BadPrice", "-3", Some(("p.png", b"png"))),
        Some(&session),
    )
    .await;
    assert_eq!(location(&resp), "/admin/products/add");
    assert!(site.state.products.is_empty());
}

#[tokio::test]
async fn product_edit_keeps_the_image_unless_a_new_one_is_uploaded() {
    let site = test_site().await;
    let session = login(&site).await;
    post_multipart(
        &site,
        "/admin/products/add",
        product_form("Ajwa", "50", Some(("ajwa.png", b"png"))),
        Some(&session),
    )
    .await;

    let resp = post_multipart(
        &site,
        "/admin/products/edit/1",
        product_form("Ajwa Deluxe", "60", None),
        Some(&session),
    )
    .await;
    assert_eq!(location(&resp), "/admin/products");

    let product = site.state.products.get(1).expect("product 1");
    assert_eq!(product.name, "Ajwa Deluxe");
    assert_eq!(product.price, 60.0);
    assert_eq!(product.image, "ajwa.png");

    // editing an unknown id is a 404
    let resp = post_multipart(
        &site,
        "/admin/products/edit/99",
        product_form("Ghost", "1", None),
        Some(&session),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_missing_id_is_a_silent_noop() {
    let site = test_site().await;
    let session = login(&site).await;
    post_multipart(
        &site,
        "/admin/products/add",
        product_form("Ajwa", "50", Some(("ajwa.png", b"png"))),
        Some(&session),
    )
    .await;

    let resp = get(&site, "/admin/products/delete/42", Some(&session)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(site.state.products.len(), 1);

    let resp = get(&site, "/admin/users/delete/42", Some(&session)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = get(&site, "/admin/posts/delete/42", Some(&session)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn post_image_is_optional_but_still_validated_when_present() {
    let site = test_site().await;
    let session = login(&site).await;

    let body = multipart_body(
        &[
            ("title", "Benefits of dates"),
            ("summary", "rich in vitamins"),
            ("content", "..."),
            ("video", ""),
        ],
        None,
    );
    let resp = post_multipart(&site, "/admin/posts/add", body, Some(&session)).await;
    assert_eq!(location(&resp), "/admin/posts");

    let posts = site.state.posts.list();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 1);
    assert_eq!(posts[0].image, None);
    assert_eq!(posts[0].video, None);

    let body = multipart_body(
        &[("title", "Bad"), ("summary", ""), ("content", ""), ("video", "")],
        Some(("image", "clip.mp4", b"video")),
    );
    let resp = post_multipart(&site, "/admin/posts/add", body, Some(&session)).await;
    assert_eq!(location(&resp), "/admin/posts/add");
    assert_eq!(site.state.posts.len(), 1);
}

#[tokio::test]
async fn unknown_blog_id_is_a_404() {
    let site = test_site().await;
    let resp = get(&site, "/blog/999", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn roster_add_requires_both_fields() {
    let site = test_site().await;
    let session = login(&site).await;

    let resp = post_form(&site, "/admin/users/add", "username=&email=a@b.com", Some(&session)).await;
    assert_eq!(location(&resp), "/admin/users/add");
    assert!(site.state.users.is_empty());

    let resp = post_form(
        &site,
        "/admin/users/add",
        "username=user1&email=user1@example.com",
        Some(&session),
    )
    .await;
    assert_eq!(location(&resp), "/admin/users");
    assert_eq!(site.state.users.list()[0].username, "user1");
}
