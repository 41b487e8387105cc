//! Configuration for the layout pipeline and the text renderer.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::model::{TriggerCategory, TriggerType};

// ─── TriggerCatalog ──────────────────────────────────────────────────────────

/// The trigger-type allow-lists.
///
/// Only `linking` affects the graph; `entry` and `membership` are passed
/// through for display decoration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerCatalog {
    pub linking: IndexSet<TriggerType>,
    pub entry: IndexSet<TriggerType>,
    pub membership: IndexSet<TriggerType>,
}

impl Default for TriggerCatalog {
    fn default() -> Self {
        let of = |category: TriggerCategory| -> IndexSet<TriggerType> {
            TriggerType::KNOWN
                .into_iter()
                .filter(|t| t.default_category() == category)
                .collect()
        };
        Self {
            linking: of(TriggerCategory::Linking),
            entry: of(TriggerCategory::Entry),
            membership: of(TriggerCategory::Membership),
        }
    }
}

impl TriggerCatalog {
    pub fn is_linking(&self, trigger_type: &TriggerType) -> bool {
        self.linking.contains(trigger_type)
    }

    /// Category of `trigger_type` under this catalog. Linking wins if a type
    /// is listed more than once.
    pub fn category(&self, trigger_type: &TriggerType) -> TriggerCategory {
        if self.linking.contains(trigger_type) {
            TriggerCategory::Linking
        } else if self.entry.contains(trigger_type) {
            TriggerCategory::Entry
        } else if self.membership.contains(trigger_type) {
            TriggerCategory::Membership
        } else {
            TriggerCategory::Other
        }
    }
}

// ─── LayoutConfig ────────────────────────────────────────────────────────────

/// Configuration for [`crate::layout_funnels`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub catalog: TriggerCatalog,
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON. Missing keys fall back to defaults.
    pub fn from_json(src: &str) -> Result<Self, LayoutError> {
        serde_json::from_str(src).map_err(LayoutError::InvalidConfig)
    }
}

// ─── RenderConfig ────────────────────────────────────────────────────────────

/// Options for the plain-text renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Print display names instead of ids.
    pub show_names: bool,
    /// Print the edge groups under each level boundary.
    pub show_groups: bool,
    /// Tag entry and membership funnels with their category.
    pub show_categories: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_names: false,
            show_groups: true,
            show_categories: true,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
