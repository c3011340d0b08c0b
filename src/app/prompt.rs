//! Seams to the user-facing surface.

/// Shown when the add form is submitted without a name
pub const NAME_REQUIRED_MESSAGE: &str = "Please enter a name before adding.";

/// Shown when the list could not be persisted
pub const SAVE_FAILED_MESSAGE: &str = "Could not save - local storage may be full.";

/// Shown when opening an item that has no link
pub const NO_LINK_MESSAGE: &str = "No link to open.";

/// Asked before an item is removed
pub const REMOVE_CONFIRM_MESSAGE: &str = "Remove this item?";

/// Messages and confirmations addressed to the user.
pub trait Prompt: Send + Sync {
    fn alert(&self, message: &str);

    /// Ask a yes/no question; `true` means the user agreed.
    fn confirm(&self, message: &str) -> bool;
}

/// Opens a link in a new browsing context that gets no reference back to
/// the caller.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> std::io::Result<()>;
}
