use axum::extract::{Multipart, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use tracing::info;

use super::{FormUpload, admin_page, read_multipart};
use crate::catalog::Product;
use crate::error::SiteError;
use crate::i18n::{ActiveLang, Phrase};
use crate::middleware::AdminSession;
use crate::middleware::flash::{self, Level};
use crate::router::SiteState;
use crate::service::uploads;
use crate::views::admin as views;

pub async fn list(
    _admin: AdminSession,
    State(state): State<SiteState>,
    ActiveLang(lang): ActiveLang,
    jar: CookieJar,
) -> Response {
    admin_page(jar, lang, "Products", views::products(lang, &state.products.list()))
}

pub async fn add_form(
    _admin: AdminSession,
    ActiveLang(lang): ActiveLang,
    jar: CookieJar,
) -> Response {
    admin_page(jar, lang, "Add product", views::product_form(lang, None))
}

pub async fn add(
    _admin: AdminSession,
    State(state): State<SiteState>,
    jar: CookieJar,
    multipart: Multipart,
) -> Result<Response, SiteError> {
    let form = read_multipart(multipart, "image").await?;

    let Some(price) = parse_price(&form) else {
        let jar = flash::set(jar, Level::Danger, Phrase::InvalidPrice);
        return Ok((jar, Redirect::to("/admin/products/add")).into_response());
    };

    // A product cannot exist without an image.
    let Some((original_name, data)) = &form.file else {
        let jar = flash::set(jar, Level::Danger, Phrase::InvalidImage);
        return Ok((jar, Redirect::to("/admin/products/add")).into_response());
    };
    let Some(image) = uploads::store(&state.upload_dir, original_name, data)? else {
        let jar = flash::set(jar, Level::Danger, Phrase::InvalidImage);
        return Ok((jar, Redirect::to("/admin/products/add")).into_response());
    };

    let id = state.products.add(Product {
        id: 0,
        name: form.text("name"),
        description: form.text("description"),
        price,
        image,
    });
    info!(id, "product added");

    let jar = flash::set(jar, Level::Success, Phrase::ProductAdded);
    Ok((jar, Redirect::to("/admin/products")).into_response())
}

pub async fn edit_form(
    _admin: AdminSession,
    State(state): State<SiteState>,
    ActiveLang(lang): ActiveLang,
    jar: CookieJar,
    Path(id): Path<u32>,
) -> Result<Response, SiteError> {
    let product = state.products.get(id).ok_or(SiteError::NotFound)?;
    Ok(admin_page(jar, lang, "Edit product", views::product_form(lang, Some(&product))))
}

pub async fn edit(
    _admin: AdminSession,
    State(state): State<SiteState>,
    jar: CookieJar,
    Path(id): Path<u32>,
    multipart: Multipart,
) -> Result<Response, SiteError> {
    if state.products.get(id).is_none() {
        return Err(SiteError::NotFound);
    }

    let form = read_multipart(multipart, "image").await?;
    let edit_url = format!("/admin/products/edit/{id}");

    let Some(price) = parse_price(&form) else {
        let jar = flash::set(jar, Level::Danger, Phrase::InvalidPrice);
        return Ok((jar, Redirect::to(&edit_url)).into_response());
    };

    // A fresh upload replaces the image; no file keeps the old one. A file
    // with a rejected extension aborts the whole edit.
    let new_image = match &form.file {
        Some((original_name, data)) => {
            match uploads::store(&state.upload_dir, original_name, data)? {
                Some(stored) => Some(stored),
                None => {
                    let jar = flash::set(jar, Level::Danger, Phrase::InvalidImage);
                    return Ok((jar, Redirect::to(&edit_url)).into_response());
                }
            }
        }
        None => None,
    };

    state.products.update(id, |product| {
        product.name = form.text("name");
        product.description = form.text("description");
        product.price = price;
        if let Some(image) = new_image {
            product.image = image;
        }
    });
    info!(id, "product updated");

    let jar = flash::set(jar, Level::Success, Phrase::ProductUpdated);
    Ok((jar, Redirect::to("/admin/products")).into_response())
}

pub async fn delete(
    _admin: AdminSession,
    State(state): State<SiteState>,
    jar: CookieJar,
    Path(id): Path<u32>,
) -> Response {
    state.products.delete(id);
    let jar = flash::set(jar, Level::Info, Phrase::ProductDeleted);
    (jar, Redirect::to("/admin/products")).into_response()
}

/// Non-negative price or None.
fn parse_price(form: &FormUpload) -> Option<f64> {
    form.text("price")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| *price >= 0.0 && price.is_finite())
}
