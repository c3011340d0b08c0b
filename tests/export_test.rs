#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{create_test_dir, open_app};
use wishlist::{HtmlRenderer, WishForm};

#[tokio::test]
async fn test_export_escapes_names_and_guards_links() {
    let temp_dir = create_test_dir();
    let (mut app, _) = open_app(temp_dir.path()).await;
    app.submit(WishForm {
        name: "<b>Bold</b> & co".to_string(),
        link: "https://shop.example/?a=1&b=2".to_string(),
        image: None,
    })
    .await
    .unwrap();
    app.submit(WishForm {
        name: "Rower".to_string(),
        ..WishForm::default()
    })
    .await
    .unwrap();

    let page = HtmlRenderer::new()
        .unwrap()
        .render_page(&app.render())
        .unwrap();

    assert!(page.contains("Your list (2)"));
    assert!(!page.contains("<b>Bold</b>"));
    assert!(page.contains("&lt;b&gt;Bold&lt;/b&gt; &amp; co"));
    assert!(page.contains(r#"target="_blank" rel="noopener noreferrer""#));
    assert!(page.contains(r#"onclick="return false;">No link</a>"#));
    assert!(page.contains("data:image/png;base64,"));
    assert!(!page.contains("emptyMsg"));
}

#[tokio::test]
async fn test_export_of_empty_list_shows_empty_message() {
    let temp_dir = create_test_dir();
    let (app, _) = open_app(temp_dir.path()).await;

    let page = HtmlRenderer::new()
        .unwrap()
        .render_page(&app.render())
        .unwrap();

    assert!(page.contains("Your list (0)"));
    assert!(page.contains(r#"<p id="emptyMsg">Your wishlist is empty. Add your first wish!</p>"#));
}
