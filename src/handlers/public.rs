use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use tracing::info;

use super::page;
use crate::db::NewMessage;
use crate::error::SiteError;
use crate::i18n::{ActiveLang, Phrase};
use crate::middleware::flash::{self, Level};
use crate::router::SiteState;
use crate::views::public as views;

pub async fn home(ActiveLang(lang): ActiveLang, jar: CookieJar) -> Response {
    page(jar, lang, "Badia Al Arab", views::home(lang))
}

pub async fn about(ActiveLang(lang): ActiveLang, jar: CookieJar) -> Response {
    page(jar, lang, "About", views::about(lang))
}

pub async fn products(
    State(state): State<SiteState>,
    ActiveLang(lang): ActiveLang,
    jar: CookieJar,
) -> Response {
    page(jar, lang, "Products", views::products(lang, &state.products.list()))
}

pub async fn faq(ActiveLang(lang): ActiveLang, jar: CookieJar) -> Response {
    page(jar, lang, "FAQ", views::faq(lang))
}

pub async fn blog(
    State(state): State<SiteState>,
    ActiveLang(lang): ActiveLang,
    jar: CookieJar,
) -> Response {
    page(jar, lang, "Blog", views::blog(lang, &state.posts.list()))
}

pub async fn blog_detail(
    State(state): State<SiteState>,
    ActiveLang(lang): ActiveLang,
    jar: CookieJar,
    Path(post_id): Path<u32>,
) -> Result<Response, SiteError> {
    let post = state.posts.get(post_id).ok_or(SiteError::NotFound)?;
    Ok(page(jar, lang, &post.title, views::blog_detail(lang, &post)))
}

pub async fn privacy(ActiveLang(lang): ActiveLang, jar: CookieJar) -> Response {
    page(jar, lang, "Privacy", views::privacy(lang))
}

pub async fn terms(ActiveLang(lang): ActiveLang, jar: CookieJar) -> Response {
    page(jar, lang, "Terms", views::terms(lang))
}

pub async fn contact_form(ActiveLang(lang): ActiveLang, jar: CookieJar) -> Response {
    page(jar, lang, "Contact", views::contact(lang))
}

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub content: String,
}

/// Contact intake is write-only from the public side: the message is stored
/// and never shown back to the visitor.
pub async fn contact_submit(
    State(state): State<SiteState>,
    jar: CookieJar,
    axum::Form(form): axum::Form<ContactForm>,
) -> Result<Response, SiteError> {
    let stored = state
        .db
        .insert_message(NewMessage {
            name: form.name,
            email: form.email,
            phone: form.phone,
            content: form.content,
        })
        .await?;
    info!(id = stored.id, "contact message stored");

    let jar = flash::set(jar, Level::Success, Phrase::MessageSent);
    Ok((jar, Redirect::to("/contact")).into_response())
}
