//! Crossing reduction: one top-down barycenter pass over the levels.
//!
//! Level 0 is sorted by id and acts as the anchor. Each following level is
//! sorted by the mean position of its predecessors on the level above. There
//! is no bottom-up sweep and no repetition, so a small change in the input
//! only moves the nodes it touches.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::types::{Edge, LevelMap, max_level};

/// Bucket the ids of `levels` by level, in map order.
pub fn level_buckets(levels: &LevelMap) -> Vec<Vec<String>> {
    let Some(max) = max_level(levels) else {
        return Vec::new();
    };
    let mut buckets: Vec<Vec<String>> = vec![Vec::new(); max + 1];
    for (id, &level) in levels {
        buckets[level].push(id.clone());
    }
    buckets
}

/// Mean position of `node_id`'s predecessors on the level above.
///
/// Every edge counts once, so parallel edges weigh in twice. Without any
/// predecessor the node is pulled to the middle of the level above.
fn barycenter(
    node_id: &str,
    incoming: &HashMap<&str, Vec<&str>>,
    prev_pos: &HashMap<&str, usize>,
    prev_len: usize,
) -> f64 {
    let positions: Vec<f64> = incoming
        .get(node_id)
        .map(|preds| {
            preds
                .iter()
                .filter_map(|p| prev_pos.get(p).map(|&i| i as f64))
                .collect()
        })
        .unwrap_or_default();
    if positions.is_empty() {
        prev_len as f64 / 2.0
    } else {
        positions.iter().sum::<f64>() / positions.len() as f64
    }
}

/// Order the nodes of each level to reduce edge crossings.
pub fn order_levels(levels: &LevelMap, edges: &[Edge]) -> Vec<Vec<String>> {
    let mut ordering = level_buckets(levels);
    if ordering.is_empty() {
        return ordering;
    }
    ordering[0].sort();

    // Predecessors on the level directly above, per target.
    let mut incoming: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges {
        let (Some(&src_level), Some(&tgt_level)) = (
            levels.get(edge.source_id.as_str()),
            levels.get(edge.target_id.as_str()),
        ) else {
            continue;
        };
        if tgt_level == src_level + 1 {
            incoming
                .entry(edge.target_id.as_str())
                .or_default()
                .push(edge.source_id.as_str());
        }
    }

    for layer_idx in 1..ordering.len() {
        let (above, rest) = ordering.split_at_mut(layer_idx);
        let prev = &above[layer_idx - 1];
        let prev_pos: HashMap<&str, usize> = prev
            .iter()
            .enumerate()
            .map(|(i, nid)| (nid.as_str(), i))
            .collect();

        let layer = &mut rest[0];
        let mut keyed: Vec<(f64, String)> = layer
            .drain(..)
            .map(|id| (barycenter(&id, &incoming, &prev_pos, prev.len()), id))
            .collect();
        keyed.sort_by(|(ba, ia), (bb, ib)| {
            ba.partial_cmp(bb).unwrap_or(Ordering::Equal).then_with(|| ia.cmp(ib))
        });
        layer.extend(keyed.into_iter().map(|(_, id)| id));
    }

    ordering
}

/// Count pairwise crossings between edges of adjacent levels in `ordering`.
///
/// Only edges stepping exactly one level down are considered.
pub fn count_crossings(ordering: &[Vec<String>], edges: &[Edge], levels: &LevelMap) -> usize {
    let position: HashMap<&str, usize> = ordering
        .iter()
        .flat_map(|layer| layer.iter().enumerate().map(|(i, id)| (id.as_str(), i)))
        .collect();

    let mut per_boundary: Vec<Vec<(usize, usize)>> = vec![Vec::new(); ordering.len()];
    for edge in edges {
        let (Some(&src_level), Some(&tgt_level)) = (
            levels.get(edge.source_id.as_str()),
            levels.get(edge.target_id.as_str()),
        ) else {
            continue;
        };
        if tgt_level != src_level + 1 || src_level >= per_boundary.len() {
            continue;
        }
        if let (Some(&sp), Some(&tp)) = (
            position.get(edge.source_id.as_str()),
            position.get(edge.target_id.as_str()),
        ) {
            per_boundary[src_level].push((sp, tp));
        }
    }

    let mut total = 0usize;
    for edges in &per_boundary {
        for i in 0..edges.len() {
            for j in (i + 1)..edges.len() {
                let (ei0, ei1) = edges[i];
                let (ej0, ej1) = edges[j];
                if (ei0 < ej0 && ei1 > ej1) || (ei0 > ej0 && ei1 < ej1) {
                    total += 1;
                }
            }
        }
    }
    total
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_ordering.rs"]
mod tests;
