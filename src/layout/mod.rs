//! Layout engine — full pipeline from funnel records to a leveled layout.
//!
//! Stages, each a pure function:
//!   1. Edge extraction (linking triggers → edges)
//!   2. Component partitioning (undirected connectivity)
//!   3. Level assignment (multi-source BFS)
//!   4. Edge grouping (per level boundary)
//!   5. Crossing reduction (one barycenter pass)

pub mod edges;
pub mod graph;
pub mod groups;
pub mod levels;
pub mod ordering;
pub mod types;

pub use edges::extract_edges;
pub use graph::{FunnelGraph, partition_components};
pub use groups::group_edges;
pub use levels::assign_levels;
pub use ordering::{count_crossings, order_levels};
pub use types::{Component, Edge, EdgeGroup, LevelMap, MerchantGraphLayout, TriggerKey};

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::config::LayoutConfig;
use crate::model::{FunnelNode, TriggerCategory};

/// Run the full layout pipeline over `funnels`.
#[tracing::instrument(level = "debug", skip_all, fields(funnels = funnels.len()))]
pub fn full_layout(funnels: &[FunnelNode], config: &LayoutConfig) -> MerchantGraphLayout {
    let funnels = dedup_funnels(funnels);
    let edges = extract_edges(&funnels, &config.catalog);
    let components = partition_components(funnels.iter().map(|f| f.id.as_str()), &edges);

    let mut layout = MerchantGraphLayout {
        trigger_categories: trigger_categories(&funnels, config),
        ..MerchantGraphLayout::default()
    };

    let edge_buckets = bucket_edges(&components, &edges);

    for (idx, (component, component_edges)) in
        components.into_iter().zip(edge_buckets).enumerate()
    {
        let levels = assign_levels(&component, &component_edges);
        let groups = group_edges(&component_edges, &levels);
        let ordered = order_levels(&levels, &component_edges);

        trace!(
            component = idx,
            members = component.len(),
            edges = component_edges.len(),
            levels = ordered.len(),
            crossings = count_crossings(&ordered, &component_edges, &levels),
            "component laid out"
        );

        layout.components.push(component);
        layout.edges_by_component.push(component_edges);
        layout.levels_by_component.push(levels);
        layout.ordered_levels_by_component.push(ordered);
        layout.edge_groups_by_level_by_component.push(groups);
    }

    debug!(
        edges = edges.len(),
        components = layout.component_count(),
        "layout complete"
    );
    layout
}

/// Split `edges` by the component holding their source, in edge order.
fn bucket_edges(components: &[Component], edges: &[Edge]) -> Vec<Vec<Edge>> {
    let component_of: HashMap<&str, usize> = components
        .iter()
        .enumerate()
        .flat_map(|(idx, c)| c.iter().map(move |id| (id.as_str(), idx)))
        .collect();
    let mut buckets: Vec<Vec<Edge>> = vec![Vec::new(); components.len()];
    for edge in edges {
        if let Some(&idx) = component_of.get(edge.source_id.as_str()) {
            buckets[idx].push(edge.clone());
        }
    }
    buckets
}

/// Drop records whose id was already seen; the first one wins.
fn dedup_funnels(funnels: &[FunnelNode]) -> Vec<FunnelNode> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut unique = Vec::with_capacity(funnels.len());
    for funnel in funnels {
        if seen.insert(funnel.id.as_str()) {
            unique.push(funnel.clone());
        } else {
            warn!(funnel = %funnel.id, "duplicate funnel id, keeping first record");
        }
    }
    unique
}

fn trigger_categories(
    funnels: &[FunnelNode],
    config: &LayoutConfig,
) -> IndexMap<String, TriggerCategory> {
    funnels
        .iter()
        .filter_map(|f| {
            let trigger_type = f.trigger_type.as_ref()?;
            Some((f.id.clone(), config.catalog.category(trigger_type)))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_pipeline.rs"]
mod tests;
