//! Configuration management
//!
//! Settings live in settings.json inside the neighborly directory:
//! ```json
//! {
//!   "sources": { "usersUrl": "...", "postsUrl": "..." },
//!   "join": { "orphansFail": true }
//! }
//! ```
//! The core never hardcodes endpoints; the defaults below belong to this
//! layer and can be overridden per run via the environment or the CLI.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default public directory endpoints
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    sources: SourceSettings,
    #[serde(default)]
    join: JoinSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SourceSettings {
    #[serde(default)]
    users_url: Option<String>,
    #[serde(default)]
    posts_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JoinSettings {
    #[serde(default = "default_true")]
    orphans_fail: bool,
}

impl Default for JoinSettings {
    fn default() -> Self {
        Self { orphans_fail: true }
    }
}

fn default_true() -> bool {
    true
}

/// Neighborly configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub users_url: String,
    pub posts_url: String,
    pub orphans_fail: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users_url: DEFAULT_USERS_URL.to_string(),
            posts_url: DEFAULT_POSTS_URL.to_string(),
            orphans_fail: true,
        }
    }
}

impl Config {
    /// Load config from the neighborly directory
    ///
    /// Endpoint resolution order:
    /// 1. NEIGHBORLY_USERS_URL / NEIGHBORLY_POSTS_URL environment variables
    /// 2. settings.json
    /// 3. built-in defaults
    pub fn load(neighborly_dir: &Path) -> Result<Self> {
        let settings_path = neighborly_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let users_url = std::env::var("NEIGHBORLY_USERS_URL")
            .ok()
            .or(raw.sources.users_url)
            .unwrap_or_else(|| DEFAULT_USERS_URL.to_string());
        let posts_url = std::env::var("NEIGHBORLY_POSTS_URL")
            .ok()
            .or(raw.sources.posts_url)
            .unwrap_or_else(|| DEFAULT_POSTS_URL.to_string());

        Ok(Self {
            users_url,
            posts_url,
            orphans_fail: raw.join.orphans_fail,
        })
    }

    /// Save config to the neighborly directory
    pub fn save(&self, neighborly_dir: &Path) -> Result<()> {
        let settings_path = neighborly_dir.join("settings.json");

        let settings = SettingsFile {
            sources: SourceSettings {
                users_url: Some(self.users_url.clone()),
                posts_url: Some(self.posts_url.clone()),
            },
            join: JoinSettings {
                orphans_fail: self.orphans_fail,
            },
        };

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}
