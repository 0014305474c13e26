//! Attack graph — asset nodes, transition edges, search, and scoring.

pub mod scoring;
pub mod search;
pub mod store;
pub mod types;

pub use scoring::{score_path, ScoredPath};
pub use search::{find_paths, find_paths_to_high_value};
pub use store::AttackGraph;
pub use types::{
    AssetKind, AssetNode, EdgeIdx, GraphStats, NodeIdx, TransitionEdge, TransitionKind,
};
