use crate::photo::InlineImage;
use serde::Serialize;

/// Browsing context used for active links
pub const LINK_TARGET: &str = "_blank";

/// Opened pages get no handle back to the list
pub const LINK_REL: &str = "noopener noreferrer";

/// Everything needed to draw the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    /// Heading with the item count, e.g. "Your list (3)"
    pub heading: String,
    pub count: usize,
    /// Shown instead of the items when the list is empty
    pub empty_state: Option<String>,
    pub items: Vec<ItemView>,
}

/// One rendered wish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: String,
    pub thumbnail: InlineImage,
    pub thumbnail_is_placeholder: bool,
    pub alt: String,
    /// Plain text, never interpreted as markup
    pub title: String,
    pub link: LinkView,
    pub actions: Vec<ItemAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkView {
    /// Opens `href` in a new context without an opener reference.
    Active {
        href: String,
        text: String,
        target: &'static str,
        rel: &'static str,
    },
    /// Placeholder text; clicks do nothing.
    Inert { text: String },
}

impl LinkView {
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        match self {
            LinkView::Active { href, .. } => Some(href.as_str()),
            LinkView::Inert { .. } => None,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            LinkView::Active { text, .. } | LinkView::Inert { text } => text.as_str(),
        }
    }
}

/// Per-item button. Serializes as `{"name": "open", "label": "Open"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    Open,
    Remove,
}

impl ItemAction {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ItemAction::Open => "open",
            ItemAction::Remove => "remove",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ItemAction::Open => "Open",
            ItemAction::Remove => "Remove",
        }
    }
}

impl Serialize for ItemAction {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ItemAction", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("label", self.label())?;
        state.end()
    }
}
