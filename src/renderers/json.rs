//! JSON renderer — the wire form handed to the dashboard's drawing layer.

use crate::error::LayoutError;
use crate::layout::MerchantGraphLayout;

use super::Renderer;

/// Serializes a layout with camelCase keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn try_render(&self, layout: &MerchantGraphLayout) -> Result<String, LayoutError> {
        let out = if self.pretty {
            serde_json::to_string_pretty(layout)
        } else {
            serde_json::to_string(layout)
        };
        out.map_err(LayoutError::Serialize)
    }
}

impl Renderer for JsonRenderer {
    /// Layouts only hold strings, integers and maps keyed by strings, so
    /// serialization cannot fail; an empty object is returned if it ever does.
    fn render(&self, layout: &MerchantGraphLayout) -> String {
        self.try_render(layout).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to an empty JSON object");
            "{}".to_string()
        })
    }
}
