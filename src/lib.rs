pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod router;
pub mod service;
pub mod views;

pub use error::SiteError;
pub use router::{SiteState, site_router};
