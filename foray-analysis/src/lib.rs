//! Foray analysis — attack-path prediction for defensive planning.
//!
//! Callers populate a [`graph::AttackGraph`] with asset nodes and
//! transition edges, then ask a [`engine::PredictionEngine`] for ranked
//! candidate attacker paths between a source and one or more targets.
//! The engine consumes only caller-supplied attribute values and returns
//! plain structured results; it performs no probing of any kind.
//!
//! Queries take `&self` and mutation takes `&mut self`, so the
//! reader-writer discipline required for concurrent use falls out of
//! the borrow checker (wrap the engine in an `RwLock` to share it).

pub mod engine;
pub mod graph;
pub mod report;

pub use engine::{PredictionEngine, PredictionQuery};
pub use graph::{AssetKind, AssetNode, AttackGraph, TransitionEdge, TransitionKind};
pub use report::{PredictedPath, Prediction, RiskAnalysis, RiskLevel};
