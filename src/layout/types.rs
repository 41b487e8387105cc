//! Layout types: Edge, EdgeGroup, Component, LevelMap, MerchantGraphLayout.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::model::{TriggerCategory, TriggerType};

// ─── Edge ────────────────────────────────────────────────────────────────────

/// A directed relationship: completing `source_id` triggers `target_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub source_id: String,
    pub target_id: String,
    pub trigger_type: TriggerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_filter_id: Option<String>,
}

impl Edge {
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        trigger_type: TriggerType,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            trigger_type,
            sub_filter_id: None,
        }
    }

    pub fn with_sub_filter(mut self, sub_filter_id: impl Into<String>) -> Self {
        self.sub_filter_id = Some(sub_filter_id.into());
        self
    }
}

/// Key shared by all edges that render as one connector.
///
/// A missing sub-filter and an empty one are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TriggerKey {
    pub source_id: String,
    pub trigger_type: TriggerType,
    pub sub_filter_id: String,
}

impl TriggerKey {
    pub fn of(edge: &Edge) -> Self {
        Self {
            source_id: edge.source_id.clone(),
            trigger_type: edge.trigger_type.clone(),
            sub_filter_id: edge.sub_filter_id.clone().unwrap_or_default(),
        }
    }
}

// ─── EdgeGroup ───────────────────────────────────────────────────────────────

/// Edges with one source, trigger type and sub-filter, fanned out to several
/// targets on the next level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeGroup {
    pub source_id: String,
    pub trigger_type: TriggerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_filter_id: Option<String>,
    pub target_ids: Vec<String>,
}

impl EdgeGroup {
    /// Start a group from its first edge.
    pub fn from_edge(edge: &Edge) -> Self {
        Self {
            source_id: edge.source_id.clone(),
            trigger_type: edge.trigger_type.clone(),
            sub_filter_id: edge.sub_filter_id.clone(),
            target_ids: vec![edge.target_id.clone()],
        }
    }
}

// ─── Component / LevelMap ────────────────────────────────────────────────────

/// Funnel ids connected through edges taken as undirected, in input order.
pub type Component = IndexSet<String>;

/// Funnel id → level within one component, in component member order.
pub type LevelMap = IndexMap<String, usize>;

/// Highest level in `levels`, or `None` for an empty map.
pub fn max_level(levels: &LevelMap) -> Option<usize> {
    levels.values().copied().max()
}

// ─── MerchantGraphLayout ─────────────────────────────────────────────────────

/// Complete layout of a funnel list.
///
/// All `*_by_component` vectors are parallel to `components`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantGraphLayout {
    pub components: Vec<Component>,
    pub edges_by_component: Vec<Vec<Edge>>,
    pub levels_by_component: Vec<LevelMap>,
    /// Component → level → ordered funnel ids.
    pub ordered_levels_by_component: Vec<Vec<Vec<String>>>,
    /// Component → level boundary `ℓ → ℓ+1` → groups.
    pub edge_groups_by_level_by_component: Vec<Vec<Vec<EdgeGroup>>>,
    /// Catalog category of every funnel that declares a trigger type.
    pub trigger_categories: IndexMap<String, TriggerCategory>,
}

impl MerchantGraphLayout {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Index of the component containing `funnel_id`.
    pub fn component_of(&self, funnel_id: &str) -> Option<usize> {
        self.components.iter().position(|c| c.contains(funnel_id))
    }

    /// Level of `funnel_id`, looked up in its own component.
    pub fn level_of(&self, funnel_id: &str) -> Option<usize> {
        let idx = self.component_of(funnel_id)?;
        self.levels_by_component[idx].get(funnel_id).copied()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
