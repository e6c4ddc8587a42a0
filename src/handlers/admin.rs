//! Dashboard, message list, user roster, and the two settings surfaces.
//!
//! The roster has no bearing on authentication; the one real credential
//! lives in the JSON file managed by `/admin/settings`. They are kept as
//! separate features on purpose.

use axum::Form;
use axum::extract::{Multipart, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use tracing::info;

use super::{admin_page, read_multipart};
use crate::catalog::User;
use crate::error::SiteError;
use crate::i18n::{ActiveLang, Phrase};
use crate::middleware::AdminSession;
use crate::middleware::flash::{self, Level};
use crate::router::SiteState;
use crate::service::credentials::Credential;
use crate::service::uploads;
use crate::views::admin as views;

pub async fn dashboard(
    _admin: AdminSession,
    State(state): State<SiteState>,
    ActiveLang(lang): ActiveLang,
    jar: CookieJar,
) -> Result<Response, SiteError> {
    let counts = views::DashboardCounts {
        products: state.products.len(),
        posts: state.posts.len(),
        users: state.users.len(),
        visitors: state.visitors.read()?,
    };
    let latest = state.db.recent_messages(5).await?;
    Ok(admin_page(jar, lang, "Dashboard", views::dashboard(lang, &counts, &latest)))
}

pub async fn messages(
    _admin: AdminSession,
    State(state): State<SiteState>,
    ActiveLang(lang): ActiveLang,
    jar: CookieJar,
) -> Result<Response, SiteError> {
    let messages = state.db.list_messages().await?;
    Ok(admin_page(jar, lang, "Messages", views::messages(lang, &messages)))
}

pub async fn users(
    _admin: AdminSession,
    State(state): State<SiteState>,
    ActiveLang(lang): ActiveLang,
    jar: CookieJar,
) -> Response {
    admin_page(jar, lang, "Users", views::users(lang, &state.users.list()))
}

pub async fn add_user_form(
    _admin: AdminSession,
    ActiveLang(lang): ActiveLang,
    jar: CookieJar,
) -> Response {
    admin_page(jar, lang, "Add user", views::user_form(lang))
}

#[derive(Debug, Deserialize)]
pub struct UserForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

pub async fn add_user(
    _admin: AdminSession,
    State(state): State<SiteState>,
    jar: CookieJar,
    Form(form): Form<UserForm>,
) -> Response {
    if form.username.is_empty() || form.email.is_empty() {
        let jar = flash::set(jar, Level::Danger, Phrase::FillAllFields);
        return (jar, Redirect::to("/admin/users/add")).into_response();
    }

    state.users.add(User {
        id: 0,
        username: form.username,
        email: form.email,
    });
    let jar = flash::set(jar, Level::Success, Phrase::UserAdded);
    (jar, Redirect::to("/admin/users")).into_response()
}

pub async fn delete_user(
    _admin: AdminSession,
    State(state): State<SiteState>,
    jar: CookieJar,
    Path(id): Path<u32>,
) -> Response {
    state.users.delete(id);
    let jar = flash::set(jar, Level::Info, Phrase::UserDeleted);
    (jar, Redirect::to("/admin/users")).into_response()
}

pub async fn settings_form(
    _admin: AdminSession,
    State(state): State<SiteState>,
    ActiveLang(lang): ActiveLang,
    jar: CookieJar,
) -> Result<Response, SiteError> {
    let credential = state.credentials.load()?;
    Ok(admin_page(jar, lang, "Settings", views::settings(lang, &credential, false)))
}

#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Overwrite the admin credential wholesale and re-render with an inline
/// notice (no redirect), matching the original panel.
pub async fn settings_save(
    _admin: AdminSession,
    State(state): State<SiteState>,
    ActiveLang(lang): ActiveLang,
    jar: CookieJar,
    Form(form): Form<SettingsForm>,
) -> Result<Response, SiteError> {
    let credential = Credential {
        username: form.username,
        password: form.password,
    };
    state.credentials.save(&credential)?;
    info!("admin credential updated");
    Ok(admin_page(jar, lang, "Settings", views::settings(lang, &credential, true)))
}

pub async fn site_settings_form(
    _admin: AdminSession,
    State(state): State<SiteState>,
    ActiveLang(lang): ActiveLang,
    jar: CookieJar,
) -> Result<Response, SiteError> {
    let settings = state.db.get_or_create_settings().await?;
    Ok(admin_page(jar, lang, "Site settings", views::site_settings(lang, &settings)))
}

/// Scalar fields are always written; the logo filename only changes when a
/// valid image was uploaded, so a plain save keeps the existing logo.
pub async fn site_settings_save(
    _admin: AdminSession,
    State(state): State<SiteState>,
    jar: CookieJar,
    multipart: Multipart,
) -> Result<Response, SiteError> {
    let mut settings = state.db.get_or_create_settings().await?;
    let form = read_multipart(multipart, "logo").await?;

    if let Some((original_name, data)) = &form.file {
        let Some(stored) = uploads::store(&state.upload_dir, original_name, data)? else {
            let jar = flash::set(jar, Level::Danger, Phrase::InvalidImage);
            return Ok((jar, Redirect::to("/admin/site-settings")).into_response());
        };
        settings.logo = stored;
    }

    settings.site_name = form.text("site_name");
    settings.email = form.text("email");
    settings.phone = form.text("phone");
    settings.address = form.text("address");
    state.db.update_settings(&settings).await?;
    info!("site settings updated");

    let jar = flash::set(jar, Level::Success, Phrase::SiteSettingsUpdated);
    Ok((jar, Redirect::to("/admin/site-settings")).into_response())
}
