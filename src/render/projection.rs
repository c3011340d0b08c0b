use super::view::{ItemAction, ItemView, LinkView, ListView, LINK_REL, LINK_TARGET};
use crate::photo::PlaceholderGenerator;
use crate::wish::{WishItem, WishList};

/// Shown when the list has no items
pub const EMPTY_STATE_MESSAGE: &str = "Your wishlist is empty. Add your first wish!";

/// Text standing in for a missing link
pub const NO_LINK_TEXT: &str = "No link";

/// Builds [`ListView`]s from wish lists, synthesizing placeholders for
/// items without a photo.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListRenderer {
    placeholders: PlaceholderGenerator,
}

impl ListRenderer {
    #[must_use]
    pub fn new(placeholders: PlaceholderGenerator) -> Self {
        Self { placeholders }
    }

    #[must_use]
    pub fn render(&self, list: &WishList) -> ListView {
        let items: Vec<ItemView> = list.iter().map(|item| self.render_item(item)).collect();
        let count = items.len();
        ListView {
            heading: format!("Your list ({count})"),
            count,
            empty_state: items.is_empty().then(|| EMPTY_STATE_MESSAGE.to_string()),
            items,
        }
    }

    fn render_item(&self, item: &WishItem) -> ItemView {
        let (thumbnail, thumbnail_is_placeholder) = match &item.image {
            Some(image) => (image.clone(), false),
            None => (self.placeholders.placeholder(&item.name), true),
        };
        let link = if item.has_link() {
            LinkView::Active {
                href: item.link.clone(),
                text: item.link.clone(),
                target: LINK_TARGET,
                rel: LINK_REL,
            }
        } else {
            LinkView::Inert {
                text: NO_LINK_TEXT.to_string(),
            }
        };
        ItemView {
            id: item.id.to_string(),
            thumbnail,
            thumbnail_is_placeholder,
            alt: item.name.clone(),
            title: item.name.clone(),
            link,
            actions: vec![ItemAction::Open, ItemAction::Remove],
        }
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
