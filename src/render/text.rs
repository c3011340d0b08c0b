use super::view::ListView;

/// Draw the view as plain terminal text: the heading, then one line per
/// item with its id and link.
#[must_use]
pub fn render_text(view: &ListView) -> String {
    let mut lines = vec![view.heading.clone()];
    if let Some(message) = &view.empty_state {
        lines.push(message.clone());
    }
    for (index, item) in view.items.iter().enumerate() {
        let photo = if item.thumbnail_is_placeholder {
            "placeholder"
        } else {
            "photo"
        };
        lines.push(format!(
            "{:>3}. {}  <{}>  [{photo}]  id={}",
            index + 1,
            item.title,
            item.link.text(),
            item.id
        ));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
