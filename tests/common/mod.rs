#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use tower::ServiceExt;

pub const BOUNDARY: &str = "X-TEST-BOUNDARY";

pub struct TestSite {
    pub app: Router,
    pub state: badia_site::SiteState,
    pub dir: tempfile::TempDir,
}

/// A fully-wired site over a fresh temp directory: its own SQLite file,
/// upload dir, visitor-count file, and credential file (created with the
/// default admin/admin pair on first login).
pub async fn test_site() -> TestSite {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = badia_site::config::Config {
        database_url: format!("sqlite:{}", dir.path().join("site.db").display()),
        upload_dir: dir.path().join("img"),
        visitor_count_path: dir.path().join("visitor_count.txt"),
        credentials_path: dir.path().join("settings.json"),
        ..Default::default()
    };

    let db = badia_site::db::connect(&cfg.database_url)
        .await
        .expect("sqlite connect");
    let state = badia_site::SiteState::new(&cfg, db);
    let app = badia_site::site_router(state.clone());
    TestSite { app, state, dir }
}

pub async fn get(site: &TestSite, uri: &str, cookies: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookies) = cookies {
        builder = builder.header(header::COOKIE, cookies);
    }
    site.app
        .clone()
        .oneshot(builder.body(Body::empty()).expect("request"))
        .await
        .expect("request failed")
}

pub async fn post_form(
    site: &TestSite,
    uri: &str,
    form: &str,
    cookies: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookies) = cookies {
        builder = builder.header(header::COOKIE, cookies);
    }
    site.app
        .clone()
        .oneshot(builder.body(Body::from(form.to_string())).expect("request"))
        .await
        .expect("request failed")
}

pub async fn post_multipart(
    site: &TestSite,
    uri: &str,
    body: Vec<u8>,
    cookies: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method("POST").uri(uri).header(
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={BOUNDARY}"),
    );
    if let Some(cookies) = cookies {
        builder = builder.header(header::COOKIE, cookies);
    }
    site.app
        .clone()
        .oneshot(builder.body(Body::from(body)).expect("request"))
        .await
        .expect("request failed")
}

/// Encode a multipart form with text fields and at most one file part.
pub fn multipart_body(
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((name, filename, data)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// The `name=value` pairs of every Set-Cookie header on a response.
pub fn set_cookies(resp: &Response<Body>) -> Vec<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .map(str::to_string)
        .collect()
}

pub fn location(resp: &Response<Body>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("missing Location header")
}

/// Log in with the default admin credential and return the cookie header
/// value for subsequent admin requests.
pub async fn login(site: &TestSite) -> String {
    let resp = post_form(site, "/login", "username=admin&password=admin", None).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER, "login should redirect");
    assert_eq!(location(&resp), "/admin");
    let cookies = set_cookies(&resp);
    assert!(!cookies.is_empty(), "login should set the session cookie");
    cookies.join("; ")
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("body was not utf-8")
}
