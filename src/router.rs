use axum::Router;
use axum::extract::FromRef;
use axum::middleware;
use axum::routing::get;
use axum_extra::extract::cookie::Key;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

use crate::catalog::{MemRepo, Post, Product, User};
use crate::config::Config;
use crate::db::SiteStorage;
use crate::handlers::{admin, auth, posts, products, public};
use crate::middleware::visitors::count_visitors;
use crate::service::{CredentialFile, VisitorCounter};

/// Shared application state: the durable store, the in-memory catalogs, and
/// the file-backed services, all behind cheap clones.
#[derive(Clone)]
pub struct SiteState {
    pub db: SiteStorage,
    pub products: Arc<MemRepo<Product>>,
    pub posts: Arc<MemRepo<Post>>,
    pub users: Arc<MemRepo<User>>,
    pub visitors: Arc<VisitorCounter>,
    pub credentials: Arc<CredentialFile>,
    pub upload_dir: PathBuf,
    key: Key,
}

impl SiteState {
    pub fn new(cfg: &Config, db: SiteStorage) -> Self {
        let key = match cfg.secret_key.as_deref() {
            Some(secret) => Key::try_from(secret.as_bytes()).unwrap_or_else(|_| {
                warn!("secret_key shorter than 64 bytes; using a random per-process cookie key");
                Key::generate()
            }),
            None => Key::generate(),
        };

        Self {
            db,
            products: Arc::new(MemRepo::new()),
            posts: Arc::new(MemRepo::new()),
            users: Arc::new(MemRepo::new()),
            visitors: Arc::new(VisitorCounter::new(cfg.visitor_count_path.clone())),
            credentials: Arc::new(CredentialFile::new(cfg.credentials_path.clone())),
            upload_dir: cfg.upload_dir.clone(),
            key,
        }
    }

    /// The starter catalog the original site shipped with. Only applied to
    /// empty collections, so a restart mid-test cannot duplicate rows.
    pub fn seed_demo_catalog(&self) {
        if self.products.is_empty() {
            self.products.add(Product {
                id: 0,
                name: "تمر العجوة".to_string(),
                description: "تمر عالي الجودة من المدينة".to_string(),
                price: 50.0,
                image: "ajwa.jpg".to_string(),
            });
            self.products.add(Product {
                id: 0,
                name: "تمر خلاص".to_string(),
                description: "تمر مميز بنكهة لذيذة".to_string(),
                price: 40.0,
                image: "khalas.jpg".to_string(),
            });
        }
        if self.posts.is_empty() {
            self.posts.add(Post {
                id: 0,
                title: "فوائد التمر".to_string(),
                summary: "التمر غني بالفيتامينات".to_string(),
                content: "...".to_string(),
                video: Some("https://www.youtube.com/embed/595WPb9ykQg".to_string()),
                image: Some("date-benefits.jpg".to_string()),
            });
            self.posts.add(Post {
                id: 0,
                title: "تخزين التمر".to_string(),
                summary: "طرق حفظ التمور".to_string(),
                content: "...".to_string(),
                video: None,
                image: Some("date-storage.jpg".to_string()),
            });
        }
        if self.users.is_empty() {
            self.users.add(User {
                id: 0,
                username: "admin".to_string(),
                email: "admin@example.com".to_string(),
            });
            self.users.add(User {
                id: 0,
                username: "user1".to_string(),
                email: "user1@example.com".to_string(),
            });
        }
    }
}

impl FromRef<SiteState> for Key {
    fn from_ref(state: &SiteState) -> Key {
        state.key.clone()
    }
}

pub fn site_router(state: SiteState) -> Router {
    Router::new()
        // public pages
        .route("/", get(public::home))
        .route("/about", get(public::about))
        .route("/products", get(public::products))
        .route("/faq", get(public::faq))
        .route("/blog", get(public::blog))
        .route("/blog/{id}", get(public::blog_detail))
        .route("/privacy", get(public::privacy))
        .route("/terms", get(public::terms))
        .route("/contact", get(public::contact_form).post(public::contact_submit))
        // session and language
        .route("/login", get(auth::login_form).post(auth::login_submit))
        .route("/logout", get(auth::logout))
        .route("/change_lang/{lang}", get(auth::change_lang))
        // admin panel (each handler is gated by the AdminSession extractor)
        .route("/admin", get(admin::dashboard))
        .route("/admin/messages", get(admin::messages))
        .route("/admin/users", get(admin::users))
        .route("/admin/users/add", get(admin::add_user_form).post(admin::add_user))
        .route("/admin/users/delete/{id}", get(admin::delete_user))
        .route("/admin/settings", get(admin::settings_form).post(admin::settings_save))
        .route(
            "/admin/site-settings",
            get(admin::site_settings_form).post(admin::site_settings_save),
        )
        .route("/admin/products", get(products::list))
        .route("/admin/products/add", get(products::add_form).post(products::add))
        .route("/admin/products/edit/{id}", get(products::edit_form).post(products::edit))
        .route("/admin/products/delete/{id}", get(products::delete))
        .route("/admin/posts", get(posts::list))
        .route("/admin/posts/add", get(posts::add_form).post(posts::add))
        .route("/admin/posts/edit/{id}", get(posts::edit_form).post(posts::edit))
        .route("/admin/posts/delete/{id}", get(posts::delete))
        .layer(middleware::from_fn_with_state(state.clone(), count_visitors))
        .with_state(state)
}
