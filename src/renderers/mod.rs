//! Renderers and the Renderer trait.

pub mod json;
pub mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

use crate::layout::MerchantGraphLayout;

/// Trait for layout renderers.
pub trait Renderer {
    /// Render a computed layout to a string.
    fn render(&self, layout: &MerchantGraphLayout) -> String;
}
