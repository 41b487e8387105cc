//! End-to-end tests for the public layout API.

use merchant_graph::{
    Edge, EdgeGroup, FunnelNode, LayoutConfig, LayoutError, RenderConfig, TriggerType,
    layout_funnels, layout_funnels_json, render_text,
};

const QUAL: TriggerType = TriggerType::QualificationMerchantComplete;

fn ids(layer: &[String]) -> Vec<&str> {
    layer.iter().map(String::as_str).collect()
}

// ── Reference scenario ────────────────────────────────────────────────────

#[test]
fn test_fan_out_scenario() {
    let funnels = vec![
        FunnelNode::bare("a"),
        FunnelNode::linked("b", QUAL, "a"),
        FunnelNode::linked("c", QUAL, "a"),
    ];
    let layout = layout_funnels(&funnels, &LayoutConfig::default());

    assert_eq!(layout.component_count(), 1);
    let members: Vec<&str> = layout.components[0].iter().map(String::as_str).collect();
    assert_eq!(members, vec!["a", "b", "c"]);

    let levels = &layout.levels_by_component[0];
    assert_eq!(levels["a"], 0);
    assert_eq!(levels["b"], 1);
    assert_eq!(levels["c"], 1);

    let groups = &layout.edge_groups_by_level_by_component[0];
    assert_eq!(groups.len(), 1);
    assert_eq!(
        groups[0],
        vec![EdgeGroup {
            source_id: "a".to_string(),
            trigger_type: QUAL,
            sub_filter_id: None,
            target_ids: vec!["b".to_string(), "c".to_string()],
        }]
    );

    let ordered = &layout.ordered_levels_by_component[0];
    assert_eq!(ordered.len(), 2);
    assert_eq!(ids(&ordered[0]), vec!["a"]);
    assert_eq!(ids(&ordered[1]), vec!["b", "c"]);
}

#[test]
fn test_fan_out_scenario_from_json() {
    let src = r#"[
        {"id": "a"},
        {"id": "b", "triggerType": "qualification_merchant_complete", "triggerConfig": {"funnelId": "a"}},
        {"id": "c", "triggerType": "qualification_merchant_complete", "triggerConfig": {"funnelId": "a"}}
    ]"#;
    let out = layout_funnels_json(src, &LayoutConfig::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["components"], serde_json::json!([["a", "b", "c"]]));
    assert_eq!(
        value["levelsByComponent"],
        serde_json::json!([{"a": 0, "b": 1, "c": 1}])
    );
    assert_eq!(
        value["orderedLevelsByComponent"],
        serde_json::json!([[["a"], ["b", "c"]]])
    );
    assert_eq!(
        value["edgeGroupsByLevelByComponent"],
        serde_json::json!([[[{
            "sourceId": "a",
            "triggerType": "qualification_merchant_complete",
            "targetIds": ["b", "c"]
        }]]])
    );
    assert_eq!(
        value["edgesByComponent"][0][0],
        serde_json::json!({
            "sourceId": "a",
            "targetId": "b",
            "triggerType": "qualification_merchant_complete"
        })
    );
}

// ── Graceful degradation ──────────────────────────────────────────────────

#[test]
fn test_empty_list() {
    let layout = layout_funnels(&[], &LayoutConfig::default());
    assert!(layout.is_empty());
    let out = layout_funnels_json("[]", &LayoutConfig::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["components"], serde_json::json!([]));
}

#[test]
fn test_dangling_reference_produces_no_edge() {
    let funnels = vec![
        FunnelNode::bare("a"),
        FunnelNode::linked("b", QUAL, "deleted-funnel"),
    ];
    let layout = layout_funnels(&funnels, &LayoutConfig::default());
    assert_eq!(layout.component_count(), 2);
    assert!(layout.edges_by_component.iter().all(Vec::is_empty));
    assert!(
        layout
            .edge_groups_by_level_by_component
            .iter()
            .all(|c| c.is_empty())
    );
    assert_eq!(layout.level_of("b"), Some(0));
}

#[test]
fn test_three_cycle_forced_root_is_deterministic() {
    let funnels = vec![
        FunnelNode::linked("A", QUAL, "C"),
        FunnelNode::linked("B", QUAL, "A"),
        FunnelNode::linked("C", QUAL, "B"),
    ];
    let first = layout_funnels(&funnels, &LayoutConfig::default());
    let roots: Vec<&str> = first.levels_by_component[0]
        .iter()
        .filter(|(_, l)| **l == 0)
        .map(|(id, _)| id.as_str())
        .collect();
    assert_eq!(roots, vec!["A"]);
    for _ in 0..5 {
        assert_eq!(layout_funnels(&funnels, &LayoutConfig::default()), first);
    }
}

#[test]
fn test_invalid_json_is_error() {
    let err = layout_funnels_json("{not json", &LayoutConfig::default()).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidFunnels(_)));
    assert!(err.to_string().starts_with("Failed to parse funnel list"));
}

#[test]
fn test_unknown_trigger_type_is_tolerated() {
    let src = r#"[{"id": "a"}, {"id": "b", "triggerType": "brand_new_trigger", "triggerConfig": {"funnelId": "a"}}]"#;
    let out = layout_funnels_json(src, &LayoutConfig::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["components"], serde_json::json!([["a"], ["b"]]));
    assert_eq!(value["triggerCategories"]["b"], "other");
}

// ── Configuration ─────────────────────────────────────────────────────────

#[test]
fn test_config_can_make_custom_trigger_linking() {
    let config =
        LayoutConfig::from_json(r#"{"catalog": {"linking": ["brand_new_trigger"]}}"#).unwrap();
    let funnels = vec![
        FunnelNode::bare("a"),
        FunnelNode::linked("b", TriggerType::Other("brand_new_trigger".into()), "a"),
        FunnelNode::linked("c", QUAL, "a"),
    ];
    let layout = layout_funnels(&funnels, &config);
    assert_eq!(layout.component_count(), 2);
    let ab = layout.component_of("a").unwrap();
    assert_eq!(
        layout.edges_by_component[ab],
        vec![Edge::new("a", "b", TriggerType::Other("brand_new_trigger".into()))]
    );
}

// ── Larger workspace ──────────────────────────────────────────────────────

#[test]
fn test_workspace_with_two_clusters_and_sub_filters() {
    let funnels: Vec<FunnelNode> = serde_json::from_str(
        r#"[
        {"id": "onboard", "name": "Onboarding", "triggerType": "form_submitted"},
        {"id": "qualify", "triggerType": "qualification_merchant_complete", "triggerConfig": {"funnelId": "onboard"}},
        {"id": "vip", "triggerType": "checkout_merchant_complete", "triggerConfig": {"funnelId": "qualify", "profileId": "gold"}},
        {"id": "vip2", "triggerType": "checkout_merchant_complete", "triggerConfig": {"funnelId": "qualify", "profileId": "gold"}},
        {"id": "std", "triggerType": "checkout_merchant_complete", "triggerConfig": {"funnelId": "qualify"}},
        {"id": "review", "triggerType": "review_merchant_complete", "triggerConfig": {"funnelId": "other-root"}},
        {"id": "other-root", "triggerType": "profile_added"}
    ]"#,
    )
    .unwrap();
    let layout = layout_funnels(&funnels, &LayoutConfig::default());
    assert_eq!(layout.component_count(), 2);

    let main = layout.component_of("onboard").unwrap();
    let groups = &layout.edge_groups_by_level_by_component[main];
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[1].len(), 2);
    assert_eq!(groups[1][0].sub_filter_id.as_deref(), Some("gold"));
    assert_eq!(groups[1][0].target_ids, vec!["vip", "vip2"]);
    assert_eq!(groups[1][1].target_ids, vec!["std"]);
    assert_eq!(
        ids(&layout.ordered_levels_by_component[main][2]),
        vec!["std", "vip", "vip2"]
    );

    let side = layout.component_of("review").unwrap();
    assert_eq!(layout.level_of("other-root"), Some(0));
    assert_eq!(layout.level_of("review"), Some(1));
    assert_eq!(layout.edges_by_component[side].len(), 1);
}

#[test]
fn test_render_text_api() {
    let funnels = vec![FunnelNode::bare("a"), FunnelNode::linked("b", QUAL, "a")];
    let out = render_text(&funnels, &LayoutConfig::default(), &RenderConfig::default());
    assert!(out.starts_with("component 1 (2 funnels)\n"));
    assert!(out.contains("a --qualification_merchant_complete--> b"));
}
