use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::error::SiteError;

/// The one admin username/password pair, stored as plain-text JSON.
/// No hashing and no history, matching the site this replaces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Default for Credential {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}

/// Narrow load/save interface over the credential file, so the backing
/// mechanism can change without touching call sites.
pub struct CredentialFile {
    path: PathBuf,
}

impl CredentialFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the stored pair, writing the default pair first if the file is
    /// missing. After this returns, exactly one pair exists on disk.
    pub fn load(&self) -> Result<Credential, SiteError> {
        if !self.path.exists() {
            let default = Credential::default();
            warn!(path = %self.path.display(), "credential file missing; writing default admin credential");
            self.save(&default)?;
            return Ok(default);
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Overwrite the backing file wholesale. Not an atomic rename; a crash
    /// mid-write can corrupt the file (accepted risk at this scale).
    pub fn save(&self, credential: &Credential) -> Result<(), SiteError> {
        fs::write(&self.path, serde_json::to_string(credential)?)?;
        Ok(())
    }
}
