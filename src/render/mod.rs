//! Projection of the wish list into a view description.
//!
//! [`ListRenderer`] is a pure function of the list: rendering twice with the
//! same state yields equal views. The view can then be drawn as text or
//! exported as a standalone HTML page.

mod html;
mod projection;
mod text;
mod view;

pub use html::{HtmlRenderer, RenderError};
pub use projection::{ListRenderer, EMPTY_STATE_MESSAGE, NO_LINK_TEXT};
pub use text::render_text;
pub use view::{ItemAction, ItemView, LinkView, ListView, LINK_REL, LINK_TARGET};
