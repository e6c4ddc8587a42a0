mod common;

use axum::http::StatusCode;
use badia_site::db::NewMessage;
use chrono::Utc;
use common::*;

#[tokio::test]
async fn contact_submission_is_persisted_with_a_timestamp() {
    let site = test_site().await;
    let started = Utc::now();

    let resp = post_form(
        &site,
        "/contact",
        "name=Ali&email=a%40b.com&phone=123&content=hello",
        None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/contact");

    let messages = site.state.db.list_messages().await.expect("list");
    assert_eq!(messages.len(), 1);
    let msg = &messages[0];
    assert_eq!(msg.name, "Ali");
    assert_eq!(msg.email, "a@b.com");
    assert_eq!(msg.phone, "123");
    assert_eq!(msg.content, "hello");
    assert!(msg.timestamp >= started);
}

#[tokio::test]
async fn admin_message_list_is_newest_first() {
    let site = test_site().await;
    site.state
        .db
        .insert_message(NewMessage {
            name: "Earlier".to_string(),
            ..Default::default()
        })
        .await
        .expect("insert");

    post_form(&site, "/contact", "name=Ali&email=a%40b.com&phone=123&content=hello", None).await;

    let session = login(&site).await;
    let body = body_text(get(&site, "/admin/messages", Some(&session)).await).await;
    let ali = body.find("Ali").expect("Ali listed");
    let earlier = body.find("Earlier").expect("Earlier listed");
    assert!(ali < earlier, "most recent message should render first");
}

#[tokio::test]
async fn dashboard_shows_only_the_five_latest_messages() {
    let site = test_site().await;
    for i in 0..7 {
        site.state
            .db
            .insert_message(NewMessage {
                name: format!("sender-{i}"),
                ..Default::default()
            })
            .await
            .expect("insert");
    }

    let session = login(&site).await;
    let body = body_text(get(&site, "/admin", Some(&session)).await).await;
    assert!(body.contains("sender-6"));
    assert!(body.contains("sender-2"));
    assert!(!body.contains("sender-1"));
    assert!(!body.contains("sender-0"));
}

#[tokio::test]
async fn site_settings_save_without_logo_keeps_the_stored_logo() {
    let site = test_site().await;
    let session = login(&site).await;

    let with_logo = multipart_body(
        &[
            ("site_name", "Badia"),
            ("email", "info@example.com"),
            ("phone", "555"),
            ("address", "Riyadh"),
        ],
        Some(("logo", "logo.png", b"png")),
    );
    let resp = post_multipart(&site, "/admin/site-settings", with_logo, Some(&session)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let without_logo = multipart_body(
        &[
            ("site_name", "Factory X"),
            ("email", "info@example.com"),
            ("phone", "555"),
            ("address", "Riyadh"),
        ],
        None,
    );
    post_multipart(&site, "/admin/site-settings", without_logo, Some(&session)).await;

    let settings = site.state.db.get_or_create_settings().await.expect("settings");
    assert_eq!(settings.site_name, "Factory X");
    assert_eq!(settings.logo, "logo.png", "logo must survive a save without a file");
}

#[tokio::test]
async fn rejected_logo_leaves_settings_untouched() {
    let site = test_site().await;
    let session = login(&site).await;
    let before = site.state.db.get_or_create_settings().await.expect("settings");

    let bad_logo = multipart_body(
        &[("site_name", "Other"), ("email", ""), ("phone", ""), ("address", "")],
        Some(("logo", "logo.svg", b"svg")),
    );
    let resp = post_multipart(&site, "/admin/site-settings", bad_logo, Some(&session)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin/site-settings");

    let after = site.state.db.get_or_create_settings().await.expect("settings");
    assert_eq!(after, before, "a rejected upload must not mutate settings");
}
