// Renderer: store -> view tree -> export surface.

pub mod html;
pub mod view;

pub use html::document_html;
pub use view::{render, ViewTree};
