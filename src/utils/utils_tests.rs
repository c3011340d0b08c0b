use super::*;
use std::path::Path;

#[test]
fn test_wishlist_folder_constant() {
    assert_eq!(WISHLIST_FOLDER, ".wishlist");
}

#[test]
fn test_default_dirs_live_under_wishlist_home() {
    let home = wishlist_home();
    assert!(home.ends_with(WISHLIST_FOLDER));
    assert_eq!(default_data_dir(), home.join("data"));
    assert_eq!(default_log_dir(), home.join("logs"));
}

#[test]
fn test_storage_file_path_appends_json_extension() {
    let path = storage_file_path(Path::new("/tmp/wl"), "wishlist_items_v1");
    assert_eq!(path, Path::new("/tmp/wl/wishlist_items_v1.json"));
}
