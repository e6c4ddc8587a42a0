use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A contact-form submission before the store stamps it.
#[derive(Debug, Clone, Default)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub content: String,
}

/// The single row of site metadata shown in page chrome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteSettings {
    pub site_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub logo: String,
}

impl SiteSettings {
    /// Lazily-created default; the site name matches the original deployment.
    pub fn initial() -> Self {
        Self {
            site_name: "مصنع بادية العرب".to_string(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            logo: String::new(),
        }
    }
}
