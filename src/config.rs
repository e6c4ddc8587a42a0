use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

/// Runtime configuration, overridable via `BADIA_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bind_addr: String,
    pub database_url: String,
    pub loglevel: String,
    pub upload_dir: PathBuf,
    pub visitor_count_path: PathBuf,
    pub credentials_path: PathBuf,
    /// Cookie key material; must be at least 64 bytes. When absent a random
    /// key is generated per process, so admin sessions do not survive restarts.
    pub secret_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite:factory.db".to_string(),
            loglevel: "info".to_string(),
            upload_dir: PathBuf::from("static/img"),
            visitor_count_path: PathBuf::from("visitor_count.txt"),
            credentials_path: PathBuf::from("settings.json"),
            secret_key: None,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("BADIA_"))
            .extract()
            .unwrap_or_else(|e| {
                eprintln!("invalid configuration: {e}; falling back to defaults");
                Config::default()
            })
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::load);
