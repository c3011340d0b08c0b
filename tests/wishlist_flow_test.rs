#![allow(clippy::indexing_slicing)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{create_test_dir, open_app, open_store, write_png};
use wishlist::app::NAME_REQUIRED_MESSAGE;
use wishlist::photo::{PlaceholderGenerator, MIME_JPEG};
use wishlist::render::render_text;
use wishlist::{RemoveOutcome, WishError, WishForm};

fn form(name: &str, link: &str) -> WishForm {
    WishForm {
        name: name.to_string(),
        link: link.to_string(),
        image: None,
    }
}

#[tokio::test]
async fn test_added_wishes_survive_restart_newest_first() {
    let temp_dir = create_test_dir();

    {
        let (mut app, _) = open_app(temp_dir.path()).await;
        app.submit(form("Lamp", "https://lamp.example")).await.unwrap();
        app.submit(form("Rower", "")).await.unwrap();
    }

    let store = open_store(temp_dir.path()).await;
    let names: Vec<&str> = store.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Rower", "Lamp"]);
}

#[tokio::test]
async fn test_wish_without_photo_renders_placeholder_and_inert_link() {
    let temp_dir = create_test_dir();
    let (mut app, _) = open_app(temp_dir.path()).await;

    app.submit(form("Rower", "")).await.unwrap();

    let view = app.render();
    assert_eq!(view.heading, "Your list (1)");
    let item = &view.items[0];
    assert!(item.thumbnail_is_placeholder);
    assert_eq!(item.thumbnail, PlaceholderGenerator::new().placeholder("Rower"));
    assert_eq!(item.link.href(), None);
    assert_eq!(item.link.text(), "No link");

    // The placeholder is drawn at render time and never persisted.
    let raw = std::fs::read_to_string(temp_dir.path().join("wishlist_items_v1.json")).unwrap();
    assert!(!raw.contains("data:image"));
}

#[tokio::test]
async fn test_blank_name_is_rejected_and_nothing_is_written() {
    let temp_dir = create_test_dir();
    let (mut app, prompt) = open_app(temp_dir.path()).await;

    let err = app.submit(form("  \t ", "https://x.example")).await.unwrap_err();

    assert!(matches!(err, WishError::EmptyName));
    assert_eq!(
        *prompt.alerts.lock().unwrap(),
        vec![NAME_REQUIRED_MESSAGE.to_string()]
    );
    assert!(!temp_dir.path().join("wishlist_items_v1.json").exists());
}

#[tokio::test]
async fn test_large_photo_is_downscaled_before_storage() {
    let temp_dir = create_test_dir();
    let photo = write_png(temp_dir.path(), "bike.png", 2000, 1000);
    let (mut app, _) = open_app(&temp_dir.path().join("data")).await;

    let mut wish = form("Bike", "https://bike.example");
    wish.image = Some(photo);
    app.submit(wish).await.unwrap();

    let store = open_store(&temp_dir.path().join("data")).await;
    let image = store.items().first().unwrap().image.clone().unwrap();
    assert_eq!(image.mime_type(), Some(MIME_JPEG));
    let decoded = image::load_from_memory(&image.to_bytes().unwrap()).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (900, 450));
}

#[tokio::test]
async fn test_confirmed_removal_is_persisted() {
    let temp_dir = create_test_dir();
    let (mut app, prompt) = open_app(temp_dir.path()).await;
    let kept = app.submit(form("Lamp", "")).await.unwrap().item;
    let gone = app.submit(form("Rower", "")).await.unwrap().item;

    let outcome = app.remove(&gone.id).await.unwrap();

    assert!(matches!(outcome, RemoveOutcome::Removed { save_error: None }));
    assert!(prompt.alerts.lock().unwrap().is_empty());
    let store = open_store(temp_dir.path()).await;
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items().first().unwrap().id, kept.id);
    assert!(!render_text(&app.render()).contains("Rower"));
}
