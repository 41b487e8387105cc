//! Edge extraction: turn linking triggers into directed edges.

use std::collections::HashSet;

use tracing::debug;

use super::types::Edge;
use crate::config::TriggerCatalog;
use crate::model::FunnelNode;

/// Emit one edge per funnel whose linking trigger references another funnel
/// present in `funnels`.
///
/// Edges come out in funnel order. Non-linking triggers, missing references,
/// self references and references to unknown funnels produce nothing.
pub fn extract_edges(funnels: &[FunnelNode], catalog: &TriggerCatalog) -> Vec<Edge> {
    let known: HashSet<&str> = funnels.iter().map(|f| f.id.as_str()).collect();
    let mut edges = Vec::new();

    for funnel in funnels {
        let Some(trigger_type) = funnel.trigger_type.as_ref() else {
            continue;
        };
        if !catalog.is_linking(trigger_type) {
            continue;
        }
        let Some(source_id) = funnel.referenced_funnel() else {
            continue;
        };
        if source_id == funnel.id {
            debug!(funnel = %funnel.id, "ignoring self-referencing trigger");
            continue;
        }
        if !known.contains(source_id) {
            debug!(
                funnel = %funnel.id,
                missing = %source_id,
                "dropping edge to unknown funnel"
            );
            continue;
        }
        edges.push(Edge {
            source_id: source_id.to_string(),
            target_id: funnel.id.clone(),
            trigger_type: trigger_type.clone(),
            sub_filter_id: funnel.sub_filter().map(str::to_owned),
        });
    }

    edges
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_edges.rs"]
mod tests;
