use super::prompt::{
    LinkOpener, Prompt, NAME_REQUIRED_MESSAGE, NO_LINK_MESSAGE, REMOVE_CONFIRM_MESSAGE,
    SAVE_FAILED_MESSAGE,
};
use crate::photo::{EncodedImage, ImageCodec, DEFAULT_MAX_WIDTH};
use crate::render::{ListRenderer, ListView};
use crate::store::{StorageError, WishStore};
use crate::wish::{WishDraft, WishError, WishId, WishItem};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Contents of the add form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishForm {
    pub name: String,
    pub link: String,
    pub image: Option<PathBuf>,
}

/// A wish that was added. `save_error` is set when the list could not be
/// persisted; the wish is in the list regardless.
#[derive(Debug)]
pub struct SubmitOutcome {
    pub item: WishItem,
    pub save_error: Option<StorageError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened(String),
    NoLink,
}

#[derive(Debug)]
pub enum RemoveOutcome {
    Removed { save_error: Option<StorageError> },
    Cancelled,
}

/// Wires the store, the photo codec and the renderer to the user's actions.
///
/// Mutating actions take `&mut self`, so a submission cannot be started
/// again while its photo is still being encoded.
pub struct WishlistApp {
    store: WishStore,
    codec: ImageCodec,
    renderer: ListRenderer,
    max_width: u32,
    prompt: Arc<dyn Prompt>,
    opener: Arc<dyn LinkOpener>,
}

impl WishlistApp {
    #[must_use]
    pub fn new(
        store: WishStore,
        codec: ImageCodec,
        prompt: Arc<dyn Prompt>,
        opener: Arc<dyn LinkOpener>,
    ) -> Self {
        Self {
            store,
            codec,
            renderer: ListRenderer::default(),
            max_width: DEFAULT_MAX_WIDTH,
            prompt,
            opener,
        }
    }

    #[must_use]
    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = max_width.max(1);
        self
    }

    #[must_use]
    pub fn store(&self) -> &WishStore {
        &self.store
    }

    #[must_use]
    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    /// Current list as a view description.
    #[must_use]
    pub fn render(&self) -> ListView {
        self.renderer.render(self.store.items())
    }

    /// Encode a chosen photo the way submit would, for a preview thumbnail.
    pub async fn preview(&self, path: &Path) -> Result<EncodedImage, WishError> {
        self.encode_photo(path).await
    }

    /// Validate the form, encode its photo if any, and add the wish.
    ///
    /// An empty name or an unusable photo aborts without creating anything.
    pub async fn submit(&mut self, form: WishForm) -> Result<SubmitOutcome, WishError> {
        let draft = match WishDraft::new(&form.name, &form.link) {
            Ok(draft) => draft,
            Err(e) => {
                self.prompt.alert(NAME_REQUIRED_MESSAGE);
                return Err(e);
            }
        };

        let image = match &form.image {
            Some(path) => Some(self.encode_photo(path).await?.image),
            None => None,
        };

        let item = draft.with_image(image).into_item();
        info!(id = %item.id, name = %item.name, "Submitting wish");
        let save_error = self.store.insert(item.clone()).await.err();
        if save_error.is_some() {
            self.prompt.alert(SAVE_FAILED_MESSAGE);
        }
        Ok(SubmitOutcome { item, save_error })
    }

    /// Open the link of `id` or tell the user there is none.
    pub fn open(&self, id: &WishId) -> Result<OpenOutcome, WishError> {
        let item = self
            .store
            .items()
            .get(id)
            .ok_or_else(|| WishError::not_found(id.as_str()))?;
        if !item.has_link() {
            self.prompt.alert(NO_LINK_MESSAGE);
            return Ok(OpenOutcome::NoLink);
        }
        self.opener.open(&item.link).map_err(WishError::OpenLink)?;
        Ok(OpenOutcome::Opened(item.link.clone()))
    }

    /// Remove `id` after the user confirms.
    pub async fn remove(&mut self, id: &WishId) -> Result<RemoveOutcome, WishError> {
        if !self.store.items().contains(id) {
            return Err(WishError::not_found(id.as_str()));
        }
        if !self.prompt.confirm(REMOVE_CONFIRM_MESSAGE) {
            info!(%id, "Removal cancelled");
            return Ok(RemoveOutcome::Cancelled);
        }
        let save_error = self.store.remove(id).await.err();
        if save_error.is_some() {
            self.prompt.alert(SAVE_FAILED_MESSAGE);
        }
        Ok(RemoveOutcome::Removed { save_error })
    }

    async fn encode_photo(&self, path: &Path) -> Result<EncodedImage, WishError> {
        match self.codec.encode_file(path, self.max_width).await {
            Ok(encoded) => Ok(encoded),
            Err(e) => {
                warn!("Photo {} rejected: {e}", path.display());
                self.prompt.alert(&format!("Could not load the image: {e}"));
                Err(e.into())
            }
        }
    }
}

impl std::fmt::Debug for WishlistApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistApp")
            .field("store", &self.store)
            .field("codec", &self.codec)
            .field("max_width", &self.max_width)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "wishlist_app_tests.rs"]
mod tests;
