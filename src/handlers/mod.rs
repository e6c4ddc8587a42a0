pub mod admin;
pub mod auth;
pub mod posts;
pub mod products;
pub mod public;

use axum::body::Bytes;
use axum::extract::Multipart;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::CookieJar;
use maud::Markup;
use std::collections::HashMap;

use crate::error::SiteError;
use crate::i18n::Lang;
use crate::middleware::flash;
use crate::views;

/// Render a public page, consuming any pending flash notice.
fn page(jar: CookieJar, lang: Lang, title: &str, body: Markup) -> Response {
    let (jar, notice) = flash::take(jar);
    (jar, Html(views::layout(lang, notice, title, body).into_string())).into_response()
}

/// Render an admin page, consuming any pending flash notice.
fn admin_page(jar: CookieJar, lang: Lang, title: &str, body: Markup) -> Response {
    let (jar, notice) = flash::take(jar);
    (
        jar,
        Html(views::admin_layout(lang, notice, title, body).into_string()),
    )
        .into_response()
}

/// A multipart form flattened into text fields plus at most one file, taken
/// from the field named `file_field`. Browsers submit an empty part when no
/// file was chosen; that counts as no file.
struct FormUpload {
    fields: HashMap<String, String>,
    file: Option<(String, Bytes)>,
}

impl FormUpload {
    fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }
}

async fn read_multipart(
    mut multipart: Multipart,
    file_field: &str,
) -> Result<FormUpload, SiteError> {
    let mut fields = HashMap::new();
    let mut file = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if name == file_field {
            let filename = field.file_name().map(str::to_string);
            let data = field.bytes().await?;
            if let Some(filename) = filename
                && !filename.is_empty()
                && !data.is_empty()
            {
                file = Some((filename, data));
            }
        } else {
            fields.insert(name, field.text().await?);
        }
    }

    Ok(FormUpload { fields, file })
}
