//! Common test utilities
#![allow(dead_code)] // Not every test binary uses every helper
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use wishlist::store::{FileStorage, Storage, WishStore, DEFAULT_STORAGE_KEY};
use wishlist::{ImageCodec, LinkOpener, Prompt, WishlistApp};

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Prompt that answers every confirmation the same way and records alerts
#[derive(Default)]
pub struct ScriptedPrompt {
    pub answer: bool,
    pub alerts: Mutex<Vec<String>>,
}

impl Prompt for ScriptedPrompt {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn confirm(&self, _message: &str) -> bool {
        self.answer
    }
}

/// Opener that only records what it was asked to open
#[derive(Default)]
pub struct NullOpener {
    pub opened: Mutex<Vec<String>>,
}

impl LinkOpener for NullOpener {
    fn open(&self, url: &str) -> std::io::Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Open the list persisted under `data_dir`
pub async fn open_store(data_dir: &Path) -> WishStore {
    let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(data_dir));
    WishStore::open(storage, DEFAULT_STORAGE_KEY).await
}

/// Build an app over `data_dir` that confirms every removal
pub async fn open_app(data_dir: &Path) -> (WishlistApp, Arc<ScriptedPrompt>) {
    let prompt = Arc::new(ScriptedPrompt {
        answer: true,
        ..ScriptedPrompt::default()
    });
    let app = WishlistApp::new(
        open_store(data_dir).await,
        ImageCodec::new(),
        prompt.clone(),
        Arc::new(NullOpener::default()),
    );
    (app, prompt)
}

/// Write a solid PNG of the given size and return its path
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.join(name);
    image::RgbImage::from_pixel(width, height, image::Rgb([200, 40, 40]))
        .save(&path)
        .expect("Failed to write PNG");
    path
}
