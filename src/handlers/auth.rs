use axum::Form;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use subtle::ConstantTimeEq;
use tracing::info;

use super::page;
use crate::error::SiteError;
use crate::i18n::{ActiveLang, LANG_COOKIE, Lang, Phrase};
use crate::middleware::auth;
use crate::middleware::flash::{self, Level};
use crate::router::SiteState;
use crate::views::public as views;

pub async fn login_form(ActiveLang(lang): ActiveLang, jar: CookieJar) -> Response {
    page(jar, lang, "Login", views::login(lang, None))
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Compare against the single stored credential. Match sets the session
/// marker; mismatch re-renders the form with a localized error and leaves
/// the session untouched.
pub async fn login_submit(
    State(state): State<SiteState>,
    ActiveLang(lang): ActiveLang,
    jar: PrivateCookieJar,
    plain_jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, SiteError> {
    let stored = state.credentials.load()?;

    let matches = stored.username.as_bytes().ct_eq(form.username.as_bytes())
        & stored.password.as_bytes().ct_eq(form.password.as_bytes());
    if bool::from(matches) {
        info!(username = %form.username, "admin login");
        let jar = auth::start_session(jar);
        return Ok((jar, Redirect::to("/admin")).into_response());
    }

    Ok(page(
        plain_jar,
        lang,
        "Login",
        views::login(lang, Some(Phrase::LoginFailed.text(lang))),
    ))
}

pub async fn logout(jar: PrivateCookieJar, plain_jar: CookieJar) -> Response {
    let jar = auth::end_session(jar);
    let plain_jar = flash::set(plain_jar, Level::Info, Phrase::LoggedOut);
    (jar, plain_jar, Redirect::to("/login")).into_response()
}

/// Set the preferred display language; unsupported codes fall back to the
/// fixed default rather than being stored verbatim.
pub async fn change_lang(
    Path(code): Path<String>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Response {
    let lang = Lang::from_code(&code).unwrap_or(Lang::DEFAULT);
    let jar = jar.add(
        Cookie::build(Cookie::new(LANG_COOKIE, lang.code()))
            .path("/")
            .same_site(SameSite::Lax)
            .build(),
    );

    let back = headers
        .get("referer")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("/")
        .to_string();
    (jar, Redirect::to(&back)).into_response()
}
