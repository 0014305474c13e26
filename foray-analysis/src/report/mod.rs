//! Ranking, aggregation, and recommendation of scored paths.

pub mod types;

pub use types::{PredictedPath, Prediction, RiskAnalysis, RiskLevel};

use foray_core::constants::{HIGH_RISK_PATH_THRESHOLD, LOW_DETECTABILITY_THRESHOLD};
use rustc_hash::FxHashSet;

use crate::graph::{AttackGraph, ScoredPath};

/// Sort candidates by risk score descending and keep the top
/// `max_paths`. The sort is stable: ties retain discovery order, so
/// reordering equal-scored input does not reorder equal-scored output.
pub fn rank_paths(mut scored: Vec<ScoredPath>, max_paths: usize) -> Vec<ScoredPath> {
    scored.sort_by(|a, b| {
        b.risk_score
            .partial_cmp(&a.risk_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(max_paths);
    scored
}

/// Aggregate risk over the returned top paths.
pub fn analyze_risks(paths: &[ScoredPath]) -> RiskAnalysis {
    if paths.is_empty() {
        return RiskAnalysis {
            analysis: Some("No paths found".into()),
            ..RiskAnalysis::default()
        };
    }

    let n = paths.len() as f64;
    let avg_probability = paths.iter().map(|p| p.probability).sum::<f64>() / n;
    let max_impact = paths.iter().map(|p| p.impact).fold(f64::MIN, f64::max);
    let avg_detectability = paths.iter().map(|p| p.detectability).sum::<f64>() / n;

    RiskAnalysis {
        overall_risk: RiskLevel::classify(avg_probability, max_impact),
        avg_probability,
        max_impact,
        avg_detectability,
        total_paths: paths.len(),
        analysis: None,
    }
}

/// Build the bounded recommendation list for the returned top paths.
///
/// Ordering: hardening entry naming the count of distinct nodes on any
/// path with risk above 0.5, then a detection note if any path has
/// detectability below 0.3, then general hardening advice; the combined
/// list is capped at `max_recommendations`.
pub fn recommendations(paths: &[ScoredPath], max_recommendations: usize) -> Vec<String> {
    if paths.is_empty() {
        return vec!["No immediate threats identified. Continue monitoring.".into()];
    }

    let mut out = Vec::new();

    let mut high_risk_nodes = FxHashSet::default();
    for path in paths {
        if path.risk_score > HIGH_RISK_PATH_THRESHOLD {
            high_risk_nodes.extend(path.nodes.iter().copied());
        }
    }
    if !high_risk_nodes.is_empty() {
        out.push(format!(
            "Focus on hardening {} high-risk nodes",
            high_risk_nodes.len()
        ));
    }

    if paths
        .iter()
        .any(|p| p.detectability < LOW_DETECTABILITY_THRESHOLD)
    {
        out.push(
            "Improve detection capabilities - several paths have low detectability".into(),
        );
    }

    out.extend(
        [
            "Implement network segmentation to break attack paths",
            "Apply principle of least privilege",
            "Enable comprehensive logging and monitoring",
            "Conduct regular security assessments",
            "Update and patch all systems regularly",
        ]
        .map(String::from),
    );

    out.truncate(max_recommendations);
    out
}

/// Convert a scored path into its caller-facing shape: id strings,
/// 4-decimal rounding, and a readable hop-by-hop description.
pub fn to_predicted(graph: &AttackGraph, path: &ScoredPath) -> PredictedPath {
    let nodes: Vec<String> = path
        .nodes
        .iter()
        .map(|&idx| graph.node_at(idx).id.clone())
        .collect();

    PredictedPath {
        path_length: path.nodes.len(),
        probability: round4(path.probability),
        impact: round4(path.impact),
        detectability: round4(path.detectability),
        complexity: round4(path.complexity),
        risk_score: round4(path.risk_score),
        description: describe_path(graph, &nodes),
        nodes,
    }
}

/// Human-readable hop-by-hop description, e.g.
/// `web → db (via credential)`. Hops whose edge cannot be found render
/// as `via unknown`; a path of fewer than 2 nodes is `Invalid path`.
fn describe_path(graph: &AttackGraph, nodes: &[String]) -> String {
    if nodes.len() < 2 {
        return "Invalid path".into();
    }

    let segments: Vec<String> = nodes
        .windows(2)
        .map(|pair| {
            let kind = graph
                .find_edge(&pair[0], &pair[1])
                .map(|edge| edge.kind.name())
                .unwrap_or("unknown");
            format!("{} → {} (via {})", pair[0], pair[1], kind)
        })
        .collect();

    segments.join(" → ")
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
