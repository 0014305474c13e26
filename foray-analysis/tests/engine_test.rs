//! End-to-end tests for the prediction engine.

use foray_analysis::{
    AssetKind, AssetNode, PredictionEngine, PredictionQuery, RiskLevel, TransitionEdge,
    TransitionKind,
};
use foray_core::EngineConfig;

fn node(id: &str, kind: AssetKind, exposure: f64, weakness: f64, controls: f64, value: f64) -> AssetNode {
    let mut node = AssetNode::new(id, kind);
    node.exposure = exposure;
    node.weakness = weakness;
    node.controls = controls;
    node.value = value;
    node
}

fn edge(source: &str, target: &str, kind: TransitionKind, likelihood: f64, detectability: f64) -> TransitionEdge {
    let mut edge = TransitionEdge::new(source, target, kind);
    edge.likelihood = likelihood;
    edge.detectability = detectability;
    edge
}

/// Two-node reference scenario with hand-computed scores.
fn reference_engine() -> PredictionEngine {
    let mut engine = PredictionEngine::new();
    engine.add_node(node("A", AssetKind::External, 1.0, 0.5, 0.1, 0.2));
    engine.add_node(node("B", AssetKind::Critical, 0.5, 0.9, 0.1, 0.9));
    engine.add_edge(edge("A", "B", TransitionKind::Exploit, 0.8, 0.2));
    engine
}

#[test]
fn test_reference_scenario_scores() {
    let engine = reference_engine();
    let result = engine.predict_attack_paths("A", Some("B"));

    assert!(result.success);
    assert_eq!(result.paths_found, 1);
    assert_eq!(result.top_paths.len(), 1);

    let path = &result.top_paths[0];
    assert_eq!(path.nodes, ["A", "B"]);
    assert_eq!(path.path_length, 2);
    // probability = 1.0 * 0.9 * 0.8 * (1 - 0.1)
    assert!((path.probability - 0.648).abs() < 1e-9);
    assert!((path.impact - 0.9).abs() < 1e-9);
    assert!((path.detectability - 0.2).abs() < 1e-9);
    assert!((path.complexity - 0.5).abs() < 1e-9);
    // (0.648 * 0.9 * 0.8 * 1.5) / 2 = 0.34992, rounded to 4 decimals
    assert!((path.risk_score - 0.3499).abs() < 1e-9);
    assert_eq!(path.description, "A → B (via exploit)");
}

#[test]
fn test_unknown_source_fails_without_panicking() {
    let engine = reference_engine();
    let result = engine.predict_attack_paths("missing", Some("B"));

    assert!(!result.success);
    assert!(result.error.as_deref().unwrap().contains("not found"));
    assert_eq!(result.paths_found, 0);
    assert!(result.top_paths.is_empty());
    assert_eq!(result.risk_analysis.overall_risk, RiskLevel::Low);
    assert!(result.recommendations.is_empty());
}

#[test]
fn test_no_edge_between_known_nodes() {
    let mut engine = PredictionEngine::new();
    engine.add_node(node("a", AssetKind::External, 0.5, 0.5, 0.5, 0.5));
    engine.add_node(node("b", AssetKind::Internal, 0.5, 0.5, 0.5, 0.5));

    let result = engine.predict_attack_paths("a", Some("b"));

    assert!(result.success);
    assert_eq!(result.paths_found, 0);
    assert!(result.top_paths.is_empty());
    assert_eq!(result.risk_analysis.overall_risk, RiskLevel::Low);
    assert_eq!(
        result.risk_analysis.analysis.as_deref(),
        Some("No paths found")
    );
    assert_eq!(result.recommendations.len(), 1);
    assert!(result.recommendations[0].contains("No immediate threats"));
}

#[test]
fn test_reset_then_statistics_all_zero() {
    let mut engine = reference_engine();
    engine.reset();

    let stats = engine.statistics();
    assert_eq!(stats.total_nodes, 0);
    assert_eq!(stats.total_edges, 0);
    assert!(stats.node_kinds.is_empty());
    assert!(stats.edge_kinds.is_empty());
    assert_eq!(stats.avg_exposure, 0.0);
    assert_eq!(stats.avg_weakness, 0.0);
    assert_eq!(stats.avg_controls, 0.0);
}

/// Two structurally distinct paths with identical attributes score
/// equally; the ranked output must retain their discovery order in
/// whichever order the branches were inserted.
#[test]
fn test_equal_scores_keep_discovery_order() {
    for flip in [false, true] {
        let mut engine = PredictionEngine::new();
        engine.add_node(node("s", AssetKind::External, 0.8, 0.5, 0.2, 0.1));
        engine.add_node(node("m1", AssetKind::Internal, 0.6, 0.6, 0.3, 0.2));
        engine.add_node(node("m2", AssetKind::Internal, 0.6, 0.6, 0.3, 0.2));
        engine.add_node(node("t", AssetKind::Critical, 0.4, 0.7, 0.2, 0.9));

        let first = if flip { "m2" } else { "m1" };
        let second = if flip { "m1" } else { "m2" };
        engine.add_edge(edge("s", first, TransitionKind::Network, 0.7, 0.4));
        engine.add_edge(edge("s", second, TransitionKind::Network, 0.7, 0.4));
        engine.add_edge(edge("m1", "t", TransitionKind::Credential, 0.5, 0.3));
        engine.add_edge(edge("m2", "t", TransitionKind::Credential, 0.5, 0.3));

        let result = engine.predict_attack_paths("s", Some("t"));
        assert_eq!(result.top_paths.len(), 2);
        assert!(
            (result.top_paths[0].risk_score - result.top_paths[1].risk_score).abs() < 1e-12,
            "branches should score identically"
        );
        assert_eq!(result.top_paths[0].nodes[1], first);
        assert_eq!(result.top_paths[1].nodes[1], second);
    }
}

#[test]
fn test_max_paths_truncates_but_counts_all() {
    let mut engine = PredictionEngine::new();
    engine.add_node(node("s", AssetKind::External, 0.8, 0.5, 0.2, 0.1));
    engine.add_node(node("t", AssetKind::Critical, 0.4, 0.7, 0.2, 0.9));
    for i in 0..5 {
        let mid = format!("mid{i}");
        engine.add_node(node(&mid, AssetKind::Internal, 0.6, 0.6, 0.3, 0.2));
        engine.add_edge(edge("s", &mid, TransitionKind::Network, 0.7, 0.4));
        engine.add_edge(edge(&mid, "t", TransitionKind::Privilege, 0.5, 0.3));
    }

    let query = PredictionQuery::new("s").to_target("t").with_max_paths(3);
    let result = engine.predict(&query);

    assert_eq!(result.paths_found, 5);
    assert_eq!(result.top_paths.len(), 3);
    for pair in result.top_paths.windows(2) {
        assert!(pair[0].risk_score >= pair[1].risk_score);
    }
}

#[test]
fn test_high_value_fanout_without_target() {
    let mut engine = PredictionEngine::new();
    engine.add_node(node("entry", AssetKind::External, 0.9, 0.4, 0.2, 0.1));
    engine.add_node(node("srv", AssetKind::Dmz, 0.6, 0.6, 0.4, 0.5));
    engine.add_node(node("vault", AssetKind::Critical, 0.2, 0.7, 0.6, 0.95));
    engine.add_node(node("files", AssetKind::Critical, 0.3, 0.6, 0.5, 0.8));
    engine.add_edge(edge("entry", "srv", TransitionKind::Application, 0.8, 0.3));
    engine.add_edge(edge("srv", "vault", TransitionKind::Credential, 0.6, 0.4));
    engine.add_edge(edge("srv", "files", TransitionKind::Network, 0.7, 0.5));

    let result = engine.predict_attack_paths("entry", None);

    assert!(result.success);
    assert_eq!(result.target, None);
    // One path to each node with value > 0.7.
    assert_eq!(result.paths_found, 2);
    let destinations: Vec<&str> = result
        .top_paths
        .iter()
        .map(|p| p.nodes.last().unwrap().as_str())
        .collect();
    assert!(destinations.contains(&"vault"));
    assert!(destinations.contains(&"files"));
}

#[test]
fn test_source_equals_target_scores_degenerate() {
    let engine = reference_engine();
    let result = engine.predict_attack_paths("A", Some("A"));

    assert!(result.success);
    assert_eq!(result.paths_found, 1);
    let path = &result.top_paths[0];
    assert_eq!(path.nodes, ["A"]);
    assert_eq!(path.probability, 0.0);
    assert_eq!(path.impact, 0.0);
    assert_eq!(path.detectability, 0.0);
    assert_eq!(path.complexity, 1.0);
    assert_eq!(path.risk_score, 0.0);
    assert_eq!(path.description, "Invalid path");
}

#[test]
fn test_dangling_edges_are_harmless() {
    let mut engine = reference_engine();
    engine.add_edge(edge("A", "phantom", TransitionKind::Exploit, 0.9, 0.1));
    engine.add_edge(edge("ghost", "B", TransitionKind::Network, 0.9, 0.1));

    let result = engine.predict_attack_paths("A", Some("B"));
    assert!(result.success);
    assert_eq!(result.paths_found, 1);

    // A dangling id is also a valid (unreachable) query target.
    let to_phantom = engine.predict_attack_paths("A", Some("phantom"));
    assert!(to_phantom.success);
    assert_eq!(to_phantom.paths_found, 0);
    assert_eq!(to_phantom.risk_analysis.overall_risk, RiskLevel::Low);
}

#[test]
fn test_depth_bound_from_config() {
    let config = EngineConfig {
        max_depth: Some(2),
        ..EngineConfig::default()
    };
    let mut engine = PredictionEngine::with_config(config);
    engine.add_node(node("a", AssetKind::External, 0.8, 0.5, 0.2, 0.1));
    engine.add_node(node("b", AssetKind::Internal, 0.6, 0.6, 0.3, 0.2));
    engine.add_node(node("c", AssetKind::Critical, 0.4, 0.7, 0.2, 0.9));
    engine.add_edge(edge("a", "b", TransitionKind::Network, 0.7, 0.4));
    engine.add_edge(edge("b", "c", TransitionKind::Privilege, 0.5, 0.3));

    // a→b→c needs three nodes; the configured bound allows two.
    let result = engine.predict_attack_paths("a", Some("c"));
    assert_eq!(result.paths_found, 0);

    let direct = engine.predict_attack_paths("a", Some("b"));
    assert_eq!(direct.paths_found, 1);
}

#[test]
fn test_result_serialization_shape() {
    let engine = reference_engine();

    let ok = serde_json::to_value(engine.predict_attack_paths("A", Some("B"))).unwrap();
    assert_eq!(ok["success"], true);
    assert_eq!(ok["target"], "B");
    assert!(ok.get("error").is_none());
    assert_eq!(ok["top_paths"][0]["nodes"][0], "A");
    assert!(ok["risk_analysis"].get("analysis").is_none());

    let failed = serde_json::to_value(engine.predict_attack_paths("nope", None)).unwrap();
    assert_eq!(failed["success"], false);
    assert!(failed.get("target").is_none());
    assert!(failed["error"].as_str().unwrap().contains("not found"));
}

#[test]
fn test_overwritten_node_uses_latest_attributes() {
    let mut engine = reference_engine();
    // Re-adding B with zero weakness kills the path probability.
    engine.add_node(node("B", AssetKind::Critical, 0.5, 0.0, 0.1, 0.9));

    let result = engine.predict_attack_paths("A", Some("B"));
    assert_eq!(result.paths_found, 1);
    assert_eq!(result.top_paths[0].probability, 0.0);
}
