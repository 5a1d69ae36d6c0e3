//! HTML and terminal renderings of a session.

pub mod html;
pub mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;
