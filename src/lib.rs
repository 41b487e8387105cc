//! merchant-graph — layered layout engine for merchant funnel relationships.
//!
//! A funnel whose trigger fires on another funnel's completion is drawn below
//! it. The engine turns a flat list of funnels into independently drawable
//! components, each with levels, an in-level ordering and grouped connectors.
//! Pixel geometry is left to the caller.
//!
//! Public API: [`layout_funnels`], [`layout_funnels_json`], [`render_text`].

pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod renderers;

#[cfg(feature = "wasm")]
mod wasm;

pub use crate::config::{LayoutConfig, RenderConfig, TriggerCatalog};
pub use crate::error::LayoutError;
pub use crate::layout::{Edge, EdgeGroup, MerchantGraphLayout};
pub use crate::model::{FunnelNode, TriggerCategory, TriggerConfig, TriggerType};

use crate::renderers::{JsonRenderer, Renderer, TextRenderer};

/// Lay out `funnels`.
///
/// Never fails: unknown references are dropped, closed cycles get a forced
/// root and an empty list gives an empty layout.
pub fn layout_funnels(funnels: &[FunnelNode], config: &LayoutConfig) -> MerchantGraphLayout {
    layout::full_layout(funnels, config)
}

/// Parse a JSON array of funnel records.
pub fn parse_funnels(src: &str) -> Result<Vec<FunnelNode>, LayoutError> {
    serde_json::from_str(src).map_err(LayoutError::InvalidFunnels)
}

/// Parse a JSON array of funnel records, lay it out and return the layout as
/// compact JSON.
pub fn layout_funnels_json(src: &str, config: &LayoutConfig) -> Result<String, LayoutError> {
    let funnels = parse_funnels(src)?;
    let layout = layout_funnels(&funnels, config);
    JsonRenderer::new(false).try_render(&layout)
}

/// Lay out `funnels` and render the result as indented text.
pub fn render_text(
    funnels: &[FunnelNode],
    layout_config: &LayoutConfig,
    render_config: &RenderConfig,
) -> String {
    let layout = layout_funnels(funnels, layout_config);
    TextRenderer::new(render_config.clone(), funnels).render(&layout)
}
