//! Plain-text renderer — dumps a layout level by level.
//!
//! Output shape per component:
//!
//! ```text
//! component 1 (3 funnels)
//!   L0  a
//!         a --qualification_merchant_complete--> b, c
//!   L1  b  c
//! ```

use std::collections::HashMap;
use std::fmt::Write;

use crate::config::RenderConfig;
use crate::layout::{EdgeGroup, MerchantGraphLayout};
use crate::model::{FunnelNode, TriggerCategory};

use super::Renderer;

/// Renders a [`MerchantGraphLayout`] as indented text.
pub struct TextRenderer<'a> {
    config: RenderConfig,
    names: HashMap<&'a str, &'a str>,
}

impl<'a> TextRenderer<'a> {
    /// `funnels` supplies display names; ids without a record (or with an
    /// empty name) print as the id.
    pub fn new(config: RenderConfig, funnels: &'a [FunnelNode]) -> Self {
        let mut names = HashMap::new();
        for f in funnels {
            if !f.name.is_empty() {
                names.entry(f.id.as_str()).or_insert(f.name.as_str());
            }
        }
        Self { config, names }
    }

    fn label<'s>(&'s self, id: &'s str) -> &'s str {
        if self.config.show_names {
            self.names.get(id).copied().unwrap_or(id)
        } else {
            id
        }
    }

    fn node_text(&self, id: &str, layout: &MerchantGraphLayout) -> String {
        let label = self.label(id);
        if !self.config.show_categories {
            return label.to_string();
        }
        match layout.trigger_categories.get(id) {
            Some(TriggerCategory::Entry) => format!("{label} [entry]"),
            Some(TriggerCategory::Membership) => format!("{label} [membership]"),
            _ => label.to_string(),
        }
    }

    fn group_text(&self, group: &EdgeGroup) -> String {
        let trigger = match group.sub_filter_id.as_deref() {
            Some(sub) if !sub.is_empty() => format!("{}[{}]", group.trigger_type, sub),
            _ => group.trigger_type.to_string(),
        };
        let targets: Vec<&str> = group.target_ids.iter().map(|t| self.label(t)).collect();
        format!(
            "{} --{}--> {}",
            self.label(&group.source_id),
            trigger,
            targets.join(", ")
        )
    }
}

impl Renderer for TextRenderer<'_> {
    fn render(&self, layout: &MerchantGraphLayout) -> String {
        let mut out = String::new();

        for (idx, component) in layout.components.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            let plural = if component.len() == 1 { "" } else { "s" };
            let _ = writeln!(
                out,
                "component {} ({} funnel{})",
                idx + 1,
                component.len(),
                plural
            );

            let ordered = &layout.ordered_levels_by_component[idx];
            let groups = &layout.edge_groups_by_level_by_component[idx];
            for (level, ids) in ordered.iter().enumerate() {
                let row: Vec<String> = ids.iter().map(|id| self.node_text(id, layout)).collect();
                let _ = writeln!(out, "  L{level}  {}", row.join("  "));
                if !self.config.show_groups {
                    continue;
                }
                for group in groups.get(level).into_iter().flatten() {
                    let _ = writeln!(out, "        {}", self.group_text(group));
                }
            }
        }

        out
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
