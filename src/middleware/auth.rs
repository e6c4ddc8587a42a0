use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};
use time::Duration;

use crate::i18n::Phrase;
use crate::middleware::flash::{self, Level};

pub const SESSION_COOKIE: &str = "session";
const SESSION_MARKER: &str = "admin";

/// Extractor gating every admin handler: present only when the encrypted
/// session cookie carries the admin marker. Rejection redirects to the login
/// page with a flash warning, before the handler can run any side effect.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = PrivateCookieJar::<Key>::from_request_parts(parts, state)
            .await
            .unwrap_or_else(|never| match never {});

        if jar
            .get(SESSION_COOKIE)
            .is_some_and(|c| c.value() == SESSION_MARKER)
        {
            return Ok(Self);
        }

        let flashed = flash::set(
            CookieJar::from_headers(&parts.headers),
            Level::Warning,
            Phrase::LoginRequired,
        );
        Err((flashed, Redirect::to("/login")).into_response())
    }
}

/// Mark the session as authenticated admin.
pub fn start_session(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(
        Cookie::build(Cookie::new(SESSION_COOKIE, SESSION_MARKER))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(Duration::hours(12))
            .build(),
    )
}

/// Clear the marker unconditionally.
pub fn end_session(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.remove(
        Cookie::build(Cookie::new(SESSION_COOKIE, ""))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build(),
    )
}
