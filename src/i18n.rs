//! Display-language selection and the localized notice strings.
//!
//! The site is Arabic-first with an English fallback, mirroring the original
//! deployment. Only transient notices are localized here; page copy lives in
//! the views.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use std::convert::Infallible;

pub const LANG_COOKIE: &str = "lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Ar,
    En,
}

impl Lang {
    pub const DEFAULT: Lang = Lang::Ar;
    pub const SUPPORTED: [Lang; 2] = [Lang::Ar, Lang::En];

    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "ar" => Some(Lang::Ar),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::Ar => "ar",
            Lang::En => "en",
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Lang::Ar => "rtl",
            Lang::En => "ltr",
        }
    }
}

/// The active display language: session cookie first, then the browser's
/// `Accept-Language`, then the fixed default.
#[derive(Debug, Clone, Copy)]
pub struct ActiveLang(pub Lang);

impl<S> FromRequestParts<S> for ActiveLang
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        if let Some(cookie) = jar.get(LANG_COOKIE)
            && let Some(lang) = Lang::from_code(cookie.value())
        {
            return Ok(ActiveLang(lang));
        }

        let accepted = parts
            .headers
            .get("accept-language")
            .and_then(|v| v.to_str().ok())
            .and_then(best_match);
        Ok(ActiveLang(accepted.unwrap_or(Lang::DEFAULT)))
    }
}

/// First supported language appearing in an `Accept-Language` header value.
/// Quality weights are ignored; browsers list preferences in order anyway.
fn best_match(header: &str) -> Option<Lang> {
    header
        .split(',')
        .filter_map(|part| {
            let tag = part.split(';').next()?.trim();
            let primary = tag.split('-').next()?;
            Lang::from_code(primary)
        })
        .next()
}

/// Every user-visible flash/notice string, in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    LoginRequired,
    LoginFailed,
    LoggedOut,
    MessageSent,
    FillAllFields,
    UserAdded,
    UserDeleted,
    SettingsSaved,
    SiteSettingsUpdated,
    InvalidImage,
    InvalidPrice,
    ProductAdded,
    ProductUpdated,
    ProductDeleted,
    PostAdded,
    PostUpdated,
    PostDeleted,
}

impl Phrase {
    /// Stable key used in the flash cookie (cookie values must stay ASCII).
    pub fn key(self) -> &'static str {
        match self {
            Phrase::LoginRequired => "login_required",
            Phrase::LoginFailed => "login_failed",
            Phrase::LoggedOut => "logged_out",
            Phrase::MessageSent => "message_sent",
            Phrase::FillAllFields => "fill_all_fields",
            Phrase::UserAdded => "user_added",
            Phrase::UserDeleted => "user_deleted",
            Phrase::SettingsSaved => "settings_saved",
            Phrase::SiteSettingsUpdated => "site_settings_updated",
            Phrase::InvalidImage => "invalid_image",
            Phrase::InvalidPrice => "invalid_price",
            Phrase::ProductAdded => "product_added",
            Phrase::ProductUpdated => "product_updated",
            Phrase::ProductDeleted => "product_deleted",
            Phrase::PostAdded => "post_added",
            Phrase::PostUpdated => "post_updated",
            Phrase::PostDeleted => "post_deleted",
        }
    }

    pub fn from_key(key: &str) -> Option<Phrase> {
        const ALL: [Phrase; 17] = [
            Phrase::LoginRequired,
            Phrase::LoginFailed,
            Phrase::LoggedOut,
            Phrase::MessageSent,
            Phrase::FillAllFields,
            Phrase::UserAdded,
            Phrase::UserDeleted,
            Phrase::SettingsSaved,
            Phrase::SiteSettingsUpdated,
            Phrase::InvalidImage,
            Phrase::InvalidPrice,
            Phrase::ProductAdded,
            Phrase::ProductUpdated,
            Phrase::ProductDeleted,
            Phrase::PostAdded,
            Phrase::PostUpdated,
            Phrase::PostDeleted,
        ];
        ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn text(self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Phrase::LoginRequired, Lang::Ar) => "يرجى تسجيل الدخول أولاً",
            (Phrase::LoginRequired, Lang::En) => "Please log in first",
            (Phrase::LoginFailed, Lang::Ar) => "اسم المستخدم أو كلمة المرور غير صحيحة",
            (Phrase::LoginFailed, Lang::En) => "Incorrect username or password",
            (Phrase::LoggedOut, Lang::Ar) => "تم تسجيل الخروج",
            (Phrase::LoggedOut, Lang::En) => "Logged out",
            (Phrase::MessageSent, Lang::Ar) => "تم إرسال الرسالة بنجاح",
            (Phrase::MessageSent, Lang::En) => "Your message was sent",
            (Phrase::FillAllFields, Lang::Ar) => "يرجى ملء جميع الحقول",
            (Phrase::FillAllFields, Lang::En) => "Please fill in all fields",
            (Phrase::UserAdded, Lang::Ar) => "تم إضافة المستخدم بنجاح",
            (Phrase::UserAdded, Lang::En) => "User added",
            (Phrase::UserDeleted, Lang::Ar) => "تم حذف المستخدم",
            (Phrase::UserDeleted, Lang::En) => "User deleted",
            (Phrase::SettingsSaved, Lang::Ar) => "تم حفظ التعديلات بنجاح",
            (Phrase::SettingsSaved, Lang::En) => "Changes saved",
            (Phrase::SiteSettingsUpdated, Lang::Ar) => "تم تحديث بيانات الموقع",
            (Phrase::SiteSettingsUpdated, Lang::En) => "Site settings updated",
            (Phrase::InvalidImage, Lang::Ar) => "يجب رفع صورة صحيحة",
            (Phrase::InvalidImage, Lang::En) => "A valid image file is required",
            (Phrase::InvalidPrice, Lang::Ar) => "يرجى إدخال سعر صحيح",
            (Phrase::InvalidPrice, Lang::En) => "Please enter a valid price",
            (Phrase::ProductAdded, Lang::Ar) => "تم إضافة المنتج بنجاح",
            (Phrase::ProductAdded, Lang::En) => "Product added",
            (Phrase::ProductUpdated, Lang::Ar) => "تم تحديث المنتج",
            (Phrase::ProductUpdated, Lang::En) => "Product updated",
            (Phrase::ProductDeleted, Lang::Ar) => "تم حذف المنتج",
            (Phrase::ProductDeleted, Lang::En) => "Product deleted",
            (Phrase::PostAdded, Lang::Ar) => "تم إضافة المقال",
            (Phrase::PostAdded, Lang::En) => "Post added",
            (Phrase::PostUpdated, Lang::Ar) => "تم تحديث المقال",
            (Phrase::PostUpdated, Lang::En) => "Post updated",
            (Phrase::PostDeleted, Lang::Ar) => "تم حذف المقال",
            (Phrase::PostDeleted, Lang::En) => "Post deleted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_code_is_rejected() {
        assert_eq!(Lang::from_code("xx"), None);
        assert_eq!(Lang::from_code("en"), Some(Lang::En));
        assert_eq!(Lang::from_code("AR"), None);
    }

    #[test]
    fn accept_language_picks_first_supported() {
        assert_eq!(best_match("en-US,en;q=0.9,ar;q=0.8"), Some(Lang::En));
        assert_eq!(best_match("fr-FR,ar;q=0.5"), Some(Lang::Ar));
        assert_eq!(best_match("fr,de"), None);
    }

    #[test]
    fn phrase_keys_round_trip() {
        for phrase in [Phrase::LoginRequired, Phrase::PostDeleted, Phrase::InvalidImage] {
            assert_eq!(Phrase::from_key(phrase.key()), Some(phrase));
        }
        assert_eq!(Phrase::from_key("nope"), None);
    }
}
