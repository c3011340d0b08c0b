use super::error::WishError;
use super::id::{new_wish_id, WishId};
use crate::photo::InlineImage;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// One entry of the wishlist.
///
/// An empty `link` means "no link". A missing `image` means the renderer
/// draws a placeholder; placeholders are never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishItem {
    pub id: WishId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
    #[serde(default)]
    pub image: Option<InlineImage>,
}

/// Stored lists may carry `"link": null`; it means the same as no link.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl WishItem {
    #[must_use]
    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }
}

/// A validated wish that has not been given an id yet.
///
/// Validation happens before any photo is encoded so an empty name is
/// rejected without doing image work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishDraft {
    name: String,
    link: String,
    image: Option<InlineImage>,
}

impl WishDraft {
    /// Trim `name` and `link`; fails with [`WishError::EmptyName`] when the
    /// trimmed name is empty. The link is not checked for URL syntax.
    pub fn new(name: &str, link: &str) -> Result<Self, WishError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WishError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            link: link.trim().to_string(),
            image: None,
        })
    }

    #[must_use]
    pub fn with_image(mut self, image: Option<InlineImage>) -> Self {
        self.image = image;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assign a fresh id and produce the stored item.
    #[must_use]
    pub fn into_item(self) -> WishItem {
        WishItem {
            id: new_wish_id(),
            name: self.name,
            link: self.link,
            image: self.image,
        }
    }
}

/// Wishes in display order, newest first. Ids are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WishList(Vec<WishItem>);

impl WishList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from stored items, keeping the first occurrence of each
    /// id. Returns the list and how many duplicates were dropped.
    #[must_use]
    pub fn from_items(items: Vec<WishItem>) -> (Self, usize) {
        let total = items.len();
        let mut seen = HashSet::new();
        let unique: Vec<WishItem> = items
            .into_iter()
            .filter(|item| seen.insert(item.id.clone()))
            .collect();
        let dropped = total.saturating_sub(unique.len());
        (Self(unique), dropped)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[WishItem] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WishItem> {
        self.0.iter()
    }

    #[must_use]
    pub fn first(&self) -> Option<&WishItem> {
        self.0.first()
    }

    #[must_use]
    pub fn get(&self, id: &WishId) -> Option<&WishItem> {
        self.0.iter().find(|item| &item.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &WishId) -> bool {
        self.get(id).is_some()
    }

    /// Insert at the front. An existing item with the same id is replaced.
    pub fn prepend(&mut self, item: WishItem) {
        self.0.retain(|existing| existing.id != item.id);
        self.0.insert(0, item);
    }

    /// Remove the item with `id`; `None` when there is no such item.
    pub fn remove(&mut self, id: &WishId) -> Option<WishItem> {
        let position = self.0.iter().position(|item| &item.id == id)?;
        Some(self.0.remove(position))
    }
}

impl<'a> IntoIterator for &'a WishList {
    type Item = &'a WishItem;
    type IntoIter = std::slice::Iter<'a, WishItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
