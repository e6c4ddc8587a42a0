//! One-shot notices carried across a redirect in a plain cookie.
//!
//! The cookie stores `level:phrase_key` rather than display text, keeping the
//! value ASCII-safe; the localized text is resolved at render time against
//! the viewer's active language.

use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::i18n::Phrase;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Danger,
}

impl Level {
    fn key(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Danger => "danger",
        }
    }

    fn from_key(key: &str) -> Option<Level> {
        match key {
            "success" => Some(Level::Success),
            "info" => Some(Level::Info),
            "warning" => Some(Level::Warning),
            "danger" => Some(Level::Danger),
            _ => None,
        }
    }

    /// CSS class used by the notice banner.
    pub fn css_class(self) -> &'static str {
        self.key()
    }
}

/// Queue a notice for the next rendered page.
pub fn set(jar: CookieJar, level: Level, phrase: Phrase) -> CookieJar {
    jar.add(
        Cookie::build(Cookie::new(
            FLASH_COOKIE,
            format!("{}:{}", level.key(), phrase.key()),
        ))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build(),
    )
}

/// Consume the pending notice, if any, clearing the cookie.
pub fn take(jar: CookieJar) -> (CookieJar, Option<(Level, Phrase)>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };
    let parsed = cookie
        .value()
        .split_once(':')
        .and_then(|(level, phrase)| Some((Level::from_key(level)?, Phrase::from_key(phrase)?)));
    let jar = jar.remove(Cookie::build(Cookie::new(FLASH_COOKIE, "")).path("/").build());
    (jar, parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_take_round_trips() {
        let jar = set(CookieJar::new(), Level::Success, Phrase::ProductAdded);
        let (_, notice) = take(jar);
        assert_eq!(notice, Some((Level::Success, Phrase::ProductAdded)));
    }

    #[test]
    fn take_on_empty_jar_is_none() {
        let (_, notice) = take(CookieJar::new());
        assert_eq!(notice, None);
    }

    #[test]
    fn malformed_cookie_is_dropped_silently() {
        let jar = CookieJar::new().add(Cookie::new(FLASH_COOKIE, "garbage"));
        let (_, notice) = take(jar);
        assert_eq!(notice, None);
    }
}
