mod atomic;

pub use atomic::atomic_write;

use std::path::{Path, PathBuf};

/// The name of the per-user wishlist folder
pub const WISHLIST_FOLDER: &str = ".wishlist";

/// The name of the user config file inside the wishlist folder
pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the wishlist home folder (`~/.wishlist`), falling back to the
/// working directory when no home directory is known.
#[must_use]
pub fn wishlist_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(WISHLIST_FOLDER)
}

/// Default directory for persisted wishlist data
#[must_use]
pub fn default_data_dir() -> PathBuf {
    wishlist_home().join("data")
}

/// Default directory for log files
#[must_use]
pub fn default_log_dir() -> PathBuf {
    wishlist_home().join("logs")
}

/// Path of the JSON document holding the value stored under `key`
#[must_use]
pub fn storage_file_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
