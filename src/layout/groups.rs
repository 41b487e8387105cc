//! Edge grouping: fold parallel edges between adjacent levels into one
//! connector per (source, trigger type, sub-filter).

use indexmap::IndexMap;

use super::types::{Edge, EdgeGroup, LevelMap, TriggerKey, max_level};

/// Group the edges of one component by level boundary.
///
/// Slot `ℓ` of the result holds the groups for edges going from level `ℓ` to
/// level `ℓ + 1`. Edges that skip a level, point backward or sideways, or
/// touch an unleveled node are left out. Groups keep the order in which
/// their key first appears; targets are appended in edge order, duplicates
/// included.
pub fn group_edges(edges: &[Edge], levels: &LevelMap) -> Vec<Vec<EdgeGroup>> {
    let boundaries = max_level(levels).unwrap_or(0);
    let mut by_boundary: Vec<IndexMap<TriggerKey, EdgeGroup>> =
        (0..boundaries).map(|_| IndexMap::new()).collect();

    for edge in edges {
        let (Some(&src_level), Some(&tgt_level)) = (
            levels.get(edge.source_id.as_str()),
            levels.get(edge.target_id.as_str()),
        ) else {
            continue;
        };
        if tgt_level != src_level + 1 {
            continue;
        }
        by_boundary[src_level]
            .entry(TriggerKey::of(edge))
            .and_modify(|group| group.target_ids.push(edge.target_id.clone()))
            .or_insert_with(|| EdgeGroup::from_edge(edge));
    }

    by_boundary
        .into_iter()
        .map(|groups| groups.into_values().collect())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_groups.rs"]
mod tests;
