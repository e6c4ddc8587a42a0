//! HTML rendering. Plain functions from data to markup; styling is minimal
//! by design, the admin panel is a tool, not a product surface.

pub mod admin;
pub mod public;

use maud::{DOCTYPE, Markup, html};

use crate::i18n::{Lang, Phrase};
use crate::middleware::flash::Level;

/// Pick the copy matching the active language.
pub(crate) fn label(lang: Lang, ar: &'static str, en: &'static str) -> &'static str {
    match lang {
        Lang::Ar => ar,
        Lang::En => en,
    }
}

pub fn layout(
    lang: Lang,
    flash: Option<(Level, Phrase)>,
    title: &str,
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang.code()) dir=(lang.dir()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                nav {
                    a href="/" { (label(lang, "الرئيسية", "Home")) }
                    " | " a href="/about" { (label(lang, "من نحن", "About")) }
                    " | " a href="/products" { (label(lang, "المنتجات", "Products")) }
                    " | " a href="/blog" { (label(lang, "المدونة", "Blog")) }
                    " | " a href="/faq" { (label(lang, "الأسئلة الشائعة", "FAQ")) }
                    " | " a href="/contact" { (label(lang, "اتصل بنا", "Contact")) }
                    " | " a href="/change_lang/ar" { "العربية" }
                    " | " a href="/change_lang/en" { "English" }
                }
                @if let Some((level, phrase)) = flash {
                    div class={ "notice " (level.css_class()) } { (phrase.text(lang)) }
                }
                main { (body) }
                footer {
                    a href="/privacy" { (label(lang, "الخصوصية", "Privacy")) }
                    " · " a href="/terms" { (label(lang, "الشروط", "Terms")) }
                }
            }
        }
    }
}

/// Sidebar-wrapped layout for the admin panel.
pub fn admin_layout(
    lang: Lang,
    flash: Option<(Level, Phrase)>,
    title: &str,
    body: Markup,
) -> Markup {
    let inner = html! {
        aside {
            a href="/admin" { (label(lang, "لوحة التحكم", "Dashboard")) }
            " | " a href="/admin/messages" { (label(lang, "الرسائل", "Messages")) }
            " | " a href="/admin/products" { (label(lang, "المنتجات", "Products")) }
            " | " a href="/admin/posts" { (label(lang, "المقالات", "Posts")) }
            " | " a href="/admin/users" { (label(lang, "المستخدمون", "Users")) }
            " | " a href="/admin/settings" { (label(lang, "الإعدادات", "Settings")) }
            " | " a href="/admin/site-settings" { (label(lang, "بيانات الموقع", "Site settings")) }
            " | " a href="/logout" { (label(lang, "خروج", "Log out")) }
        }
        section { (body) }
    };
    layout(lang, flash, title, inner)
}

pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head { meta charset="utf-8"; title { (status) " " (message) } }
            body {
                h1 { (status) }
                p { (message) }
                p { a href="/" { "Back to home" } }
            }
        }
    }
}
