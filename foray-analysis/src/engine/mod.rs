//! The prediction engine — orchestrates search, scoring, and reporting.

use rayon::prelude::*;
use tracing::{debug, info};

use foray_core::constants::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_PATHS};
use foray_core::EngineConfig;

use crate::graph::{
    find_paths, find_paths_to_high_value, score_path, AssetNode, AttackGraph, NodeIdx, ScoredPath,
    TransitionEdge,
};
use crate::report::{self, PredictedPath, Prediction, RiskAnalysis};

/// Parameters for one prediction query.
///
/// `target = None` asks for paths to every high-value node instead of a
/// single destination.
#[derive(Debug, Clone)]
pub struct PredictionQuery {
    pub source: String,
    pub target: Option<String>,
    pub max_paths: usize,
    pub max_depth: usize,
}

impl PredictionQuery {
    /// Query from `source` with the engine-wide defaults.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: None,
            max_paths: DEFAULT_MAX_PATHS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn to_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = max_paths;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Attack-path prediction engine.
///
/// Owns the graph and the configuration; construct one explicitly and
/// share it however the caller sees fit. Queries borrow `&self`,
/// mutation borrows `&mut self` — concurrent readers over an unmodified
/// graph are safe, and a writer excludes everything else, checked at
/// compile time.
pub struct PredictionEngine {
    graph: AttackGraph,
    config: EngineConfig,
}

impl PredictionEngine {
    /// Engine with default configuration and an empty graph.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Engine with explicit configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            graph: AttackGraph::new(),
            config,
        }
    }

    /// The underlying graph, for read access.
    pub fn graph(&self) -> &AttackGraph {
        &self.graph
    }

    /// Add an asset. A duplicate id overwrites the stored node.
    pub fn add_node(&mut self, node: AssetNode) -> NodeIdx {
        self.graph.add_node(node)
    }

    /// Add a transition. Endpoints are not checked.
    pub fn add_edge(&mut self, edge: TransitionEdge) {
        self.graph.add_edge(edge);
    }

    /// Graph statistics.
    pub fn statistics(&self) -> crate::graph::GraphStats {
        self.graph.statistics()
    }

    /// Discard all nodes and edges.
    pub fn reset(&mut self) {
        self.graph.reset();
    }

    /// Predict attack paths from `source` with configured defaults.
    pub fn predict_attack_paths(&self, source: &str, target: Option<&str>) -> Prediction {
        let mut query = PredictionQuery::new(source)
            .with_max_paths(self.config.effective_max_paths())
            .with_max_depth(self.config.effective_max_depth());
        if let Some(target) = target {
            query = query.to_target(target);
        }
        self.predict(&query)
    }

    /// Run a prediction query.
    ///
    /// An unknown source is not an error at the call boundary: the
    /// result carries `success = false` and a descriptive message. A
    /// query that finds nothing succeeds with zero paths and a Low
    /// overall risk.
    pub fn predict(&self, query: &PredictionQuery) -> Prediction {
        debug!(
            source = %query.source,
            dest = query.target.as_deref(),
            max_paths = query.max_paths,
            max_depth = query.max_depth,
            "predicting attack paths"
        );

        if self.graph.node_idx(&query.source).is_none() {
            return Prediction {
                success: false,
                source: query.source.clone(),
                target: query.target.clone(),
                paths_found: 0,
                top_paths: Vec::new(),
                risk_analysis: RiskAnalysis::default(),
                recommendations: Vec::new(),
                error: Some(format!("Source node {} not found", query.source)),
            };
        }

        let candidates = match query.target.as_deref() {
            Some(target) => find_paths(&self.graph, &query.source, target, query.max_depth),
            None => find_paths_to_high_value(
                &self.graph,
                &query.source,
                self.config.effective_high_value_threshold(),
                query.max_depth,
            ),
        };
        let paths_found = candidates.len();

        let scored: Vec<ScoredPath> = candidates
            .par_iter()
            .map(|path| score_path(&self.graph, path))
            .collect();

        let top = report::rank_paths(scored, query.max_paths);
        let risk_analysis = report::analyze_risks(&top);
        let recommendations =
            report::recommendations(&top, self.config.effective_max_recommendations());
        let top_paths: Vec<PredictedPath> = top
            .iter()
            .map(|path| report::to_predicted(&self.graph, path))
            .collect();

        info!(
            paths_found,
            returned = top_paths.len(),
            overall_risk = %risk_analysis.overall_risk,
            "attack path prediction complete"
        );

        Prediction {
            success: true,
            source: query.source.clone(),
            target: query.target.clone(),
            paths_found,
            top_paths,
            risk_analysis,
            recommendations,
            error: None,
        }
    }
}

impl Default for PredictionEngine {
    fn default() -> Self {
        Self::new()
    }
}
