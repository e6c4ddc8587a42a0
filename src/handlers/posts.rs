use axum::extract::{Multipart, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use tracing::info;

use super::{admin_page, read_multipart};
use crate::catalog::Post;
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
    admin_page(jar, lang, "Posts", views::posts(lang, &state.posts.list()))
}

pub async fn add_form(
    _admin: AdminSession,
    ActiveLang(lang): ActiveLang,
    jar: CookieJar,
) -> Response {
    admin_page(jar, lang, "Add post", views::post_form(lang, None))
}

pub async fn add(
    _admin: AdminSession,
    State(state): State<SiteState>,
    jar: CookieJar,
    multipart: Multipart,
) -> Result<Response, SiteError> {
    let form = read_multipart(multipart, "image").await?;

    // Unlike products, a post image is optional; a supplied-but-rejected
    // file still aborts the add instead of being dropped on the floor.
    let image = match &form.file {
        Some((original_name, data)) => {
            match uploads::store(&state.upload_dir, original_name, data)? {
                Some(stored) => Some(stored),
                None => {
                    let jar = flash::set(jar, Level::Danger, Phrase::InvalidImage);
                    return Ok((jar, Redirect::to("/admin/posts/add")).into_response());
                }
            }
        }
        None => None,
    };

    let video = Some(form.text("video")).filter(|v| !v.trim().is_empty());
    let id = state.posts.add(Post {
        id: 0,
        title: form.text("title"),
        summary: form.text("summary"),
        content: form.text("content"),
        video,
        image,
    });
    info!(id, "post added");

    let jar = flash::set(jar, Level::Success, Phrase::PostAdded);
    Ok((jar, Redirect::to("/admin/posts")).into_response())
}

pub async fn edit_form(
    _admin: AdminSession,
    State(state): State<SiteState>,
    ActiveLang(lang): ActiveLang,
    jar: CookieJar,
    Path(id): Path<u32>,
) -> Result<Response, SiteError> {
    let post = state.posts.get(id).ok_or(SiteError::NotFound)?;
    Ok(admin_page(jar, lang, "Edit post", views::post_form(lang, Some(&post))))
}

pub async fn edit(
    _admin: AdminSession,
    State(state): State<SiteState>,
    jar: CookieJar,
    Path(id): Path<u32>,
    multipart: Multipart,
) -> Result<Response, SiteError> {
    if state.posts.get(id).is_none() {
        return Err(SiteError::NotFound);
    }

    let form = read_multipart(multipart, "image").await?;

    let new_image = match &form.file {
        Some((original_name, data)) => {
            match uploads::store(&state.upload_dir, original_name, data)? {
                Some(stored) => Some(stored),
                None => {
                    let jar = flash::set(jar, Level::Danger, Phrase::InvalidImage);
                    let edit_url = format!("/admin/posts/edit/{id}");
                    return Ok((jar, Redirect::to(&edit_url)).into_response());
                }
            }
        }
        None => None,
    };

    let video = Some(form.text("video")).filter(|v| !v.trim().is_empty());
    state.posts.update(id, |post| {
        post.title = form.text("title");
        post.summary = form.text("summary");
        post.content = form.text("content");
        post.video = video;
        if let Some(image) = new_image {
            post.image = Some(image);
        }
    });
    info!(id, "post updated");

    let jar = flash::set(jar, Level::Success, Phrase::PostUpdated);
    Ok((jar, Redirect::to("/admin/posts")).into_response())
}

pub async fn delete(
    _admin: AdminSession,
    State(state): State<SiteState>,
    jar: CookieJar,
    Path(id): Path<u32>,
) -> Response {
    state.posts.delete(id);
    let jar = flash::set(jar, Level::Info, Phrase::PostDeleted);
    (jar, Redirect::to("/admin/posts")).into_response()
}
