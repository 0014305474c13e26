//! Path scoring — probability, impact, detectability, complexity, risk.

use foray_core::constants::{DEFAULT_EDGE_DETECTABILITY, RISK_NORMALIZER};

use super::store::AttackGraph;
use super::types::{EdgeIdx, NodeIdx};

/// A candidate path with its derived scores at full precision.
#[derive(Debug, Clone)]
pub struct ScoredPath {
    /// Node arena indices in traversal order.
    pub nodes: Vec<NodeIdx>,
    /// Arena indices of the edges that matched each hop. A hop with no
    /// stored edge contributes no entry.
    pub edges: Vec<EdgeIdx>,
    /// Product of per-hop transition probabilities.
    pub probability: f64,
    /// Value of the final node.
    pub impact: f64,
    /// Mean detectability across matched edges (0.5 when none matched).
    pub detectability: f64,
    /// Inverse of path length: shorter paths are simpler to execute.
    pub complexity: f64,
    /// Normalized composite in [0, 1] (given in-range inputs).
    pub risk_score: f64,
}

/// Score a candidate path.
///
/// A path of fewer than 2 nodes is degenerate: probability 0, impact 0,
/// detectability 0, complexity 1, risk 0.
///
/// Each hop `(u, v)` multiplies the probability accumulator by
/// `u.exposure * v.weakness * edge.likelihood * (1 - v.controls)` using
/// the first stored edge between the pair; hops with no stored edge are
/// skipped. Attribute values are used exactly as supplied — the caller
/// contract keeps them in [0, 1].
pub fn score_path(graph: &AttackGraph, nodes: &[NodeIdx]) -> ScoredPath {
    if nodes.len() < 2 {
        return ScoredPath {
            nodes: nodes.to_vec(),
            edges: Vec::new(),
            probability: 0.0,
            impact: 0.0,
            detectability: 0.0,
            complexity: 1.0,
            risk_score: 0.0,
        };
    }

    let mut probability = 1.0;
    let mut detectability_sum = 0.0;
    let mut edges = Vec::with_capacity(nodes.len() - 1);

    for pair in nodes.windows(2) {
        let u = graph.node_at(pair[0]);
        let v = graph.node_at(pair[1]);

        if let Some(edge_idx) = graph.find_edge_idx(&u.id, &v.id) {
            let edge = graph.edge_at(edge_idx);
            probability *= u.exposure * v.weakness * edge.likelihood * (1.0 - v.controls);
            detectability_sum += edge.detectability;
            edges.push(edge_idx);
        }
    }

    let impact = graph.node_at(nodes[nodes.len() - 1]).value;
    let complexity = 1.0 / nodes.len() as f64;
    let detectability = if edges.is_empty() {
        DEFAULT_EDGE_DETECTABILITY
    } else {
        detectability_sum / edges.len() as f64
    };
    let risk_score = risk_score(probability, impact, detectability, complexity);

    ScoredPath {
        nodes: nodes.to_vec(),
        edges,
        probability,
        impact,
        detectability,
        complexity,
        risk_score,
    }
}

/// Composite risk: `probability * impact * (1 - detectability) *
/// (1 + complexity)`, normalized by its theoretical maximum (~2.0) and
/// clamped at the upper bound.
pub fn risk_score(probability: f64, impact: f64, detectability: f64, complexity: f64) -> f64 {
    let raw = probability * impact * (1.0 - detectability) * (1.0 + complexity);
    (raw / RISK_NORMALIZER).min(1.0)
}
