//! User-level configuration loaded from `~/.wishlist/config.toml`.
//!
//! The file is optional; missing tables and fields take their defaults.

mod loader;
pub use loader::{load_user_config, load_user_config_from};
use crate::photo::{DEFAULT_JPEG_QUALITY, DEFAULT_MAX_WIDTH};
use crate::store::{DEFAULT_QUOTA_BYTES, DEFAULT_STORAGE_KEY};
use crate::utils::{wishlist_home, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}
fn default_quota_bytes() -> usize {
    DEFAULT_QUOTA_BYTES
}
fn default_max_width() -> u32 {
    DEFAULT_MAX_WIDTH
}
fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

/// Where and how the list is persisted (`[storage]` table).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Data directory; `~/.wishlist/data` when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default = "default_storage_key")]
    pub key: String,
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: usize,
}
impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            key: default_storage_key(),
            quota_bytes: default_quota_bytes(),
        }
    }
}

/// Photo ingestion settings (`[image]` table).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ImageConfig {
    #[serde(default = "default_max_width")]
    pub max_width: u32,
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}
impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

/// Top-level user configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub image: ImageConfig,
}

/// Resolve the canonical path for the user config file.
#[must_use]
pub fn user_config_path() -> PathBuf {
    wishlist_home().join(CONFIG_FILE)
}

#[cfg(test)]
#[path = "../user_config_tests.rs"]
mod user_config_tests;
