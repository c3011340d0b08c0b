use super::*;
use crate::photo::{InlineImage, MIME_JPEG};

fn item(id: &str, name: &str) -> WishItem {
    WishItem {
        id: WishId::from(id),
        name: name.to_string(),
        link: String::new(),
        image: None,
    }
}

#[test]
fn test_draft_trims_name_and_link() {
    let draft = WishDraft::new("  Rower  ", "  https://example.com/bike ").unwrap();
    let item = draft.into_item();
    assert_eq!(item.name, "Rower");
    assert_eq!(item.link, "https://example.com/bike");
    assert!(item.image.is_none());
}

#[test]
fn test_draft_rejects_blank_name() {
    assert!(matches!(WishDraft::new("", "x"), Err(WishError::EmptyName)));
    assert!(matches!(WishDraft::new(" \n\t ", ""), Err(WishError::EmptyName)));
}

#[test]
fn test_draft_accepts_non_url_link() {
    let item = WishDraft::new("Book", "ask grandma").unwrap().into_item();
    assert_eq!(item.link, "ask grandma");
    assert!(item.has_link());
}

#[test]
fn test_draft_carries_image() {
    let image = InlineImage::from_bytes(MIME_JPEG, b"jpeg");
    let item = WishDraft::new("Camera", "")
        .unwrap()
        .with_image(Some(image.clone()))
        .into_item();
    assert_eq!(item.image, Some(image));
    assert!(!item.has_link());
}

#[test]
fn test_prepend_puts_newest_first() {
    let mut list = WishList::new();
    list.prepend(item("1", "first"));
    list.prepend(item("2", "second"));

    let names: Vec<&str> = list.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["second", "first"]);
}

#[test]
fn test_prepend_replaces_same_id() {
    let mut list = WishList::new();
    list.prepend(item("1", "old"));
    list.prepend(item("2", "other"));
    list.prepend(item("1", "new"));

    assert_eq!(list.len(), 2);
    assert_eq!(list.first().unwrap().name, "new");
}

#[test]
fn test_remove_existing_and_missing() {
    let mut list = WishList::new();
    list.prepend(item("1", "a"));
    list.prepend(item("2", "b"));

    let removed = list.remove(&WishId::from("1")).unwrap();
    assert_eq!(removed.name, "a");
    assert_eq!(list.len(), 1);
    assert!(!list.contains(&WishId::from("1")));

    assert!(list.remove(&WishId::from("nope")).is_none());
    assert_eq!(list.len(), 1);
}

#[test]
fn test_from_items_drops_duplicate_ids() {
    let (list, dropped) =
        WishList::from_items(vec![item("1", "a"), item("2", "b"), item("1", "c")]);
    assert_eq!(dropped, 1);
    let names: Vec<&str> = list.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_item_json_layout() {
    let json = serde_json::to_value(item("42", "Rower")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"id": "42", "name": "Rower", "link": "", "image": null})
    );
}

#[test]
fn test_item_missing_link_and_image_default() {
    let parsed: WishItem = serde_json::from_str(r#"{"id":"7","name":"Kite"}"#).unwrap();
    assert_eq!(parsed.link, "");
    assert!(parsed.image.is_none());
}

#[test]
fn test_item_null_link_is_empty() {
    let parsed: WishItem =
        serde_json::from_str(r#"{"id":"7","name":"Kite","link":null,"image":null}"#).unwrap();
    assert_eq!(parsed.link, "");
    assert!(!parsed.has_link());
}
