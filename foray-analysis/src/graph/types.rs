//! Attack graph types — asset nodes, transition edges, statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Index of a node in the graph's arena.
pub type NodeIdx = u32;

/// Index of an edge in the graph's arena.
pub type EdgeIdx = u32;

/// Where an asset sits in the network topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Outside the perimeter — typically the attacker's starting point.
    External,
    Perimeter,
    Dmz,
    Internal,
    /// Crown-jewel systems: domain controllers, databases, key stores.
    Critical,
    User,
    Admin,
}

impl AssetKind {
    /// All asset kinds.
    pub const ALL: &'static [AssetKind] = &[
        Self::External,
        Self::Perimeter,
        Self::Dmz,
        Self::Internal,
        Self::Critical,
        Self::User,
        Self::Admin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::External => "external",
            Self::Perimeter => "perimeter",
            Self::Dmz => "dmz",
            Self::Internal => "internal",
            Self::Critical => "critical",
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How an attacker moves from one asset to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    /// Network-level reachability (routing, firewall pass-through).
    Network,
    /// Application-level access (exposed service, API).
    Application,
    /// Reuse of harvested or shared credentials.
    Credential,
    /// Privilege escalation on the target.
    Privilege,
    /// Exploitation of a software weakness.
    Exploit,
}

impl TransitionKind {
    /// All transition kinds.
    pub const ALL: &'static [TransitionKind] = &[
        Self::Network,
        Self::Application,
        Self::Credential,
        Self::Privilege,
        Self::Exploit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Application => "application",
            Self::Credential => "credential",
            Self::Privilege => "privilege",
            Self::Exploit => "exploit",
        }
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An asset in the attack graph.
///
/// The four scalars model how reachable, how vulnerable, how
/// well-defended, and how valuable the asset is to an attacker. Values
/// are caller-validated to [0, 1]; the engine stores them unclamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetNode {
    pub id: String,
    pub kind: AssetKind,
    pub exposure: f64,
    pub weakness: f64,
    pub controls: f64,
    /// Attacker-perceived worth of the asset.
    pub value: f64,
    /// Opaque caller-supplied annotations.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl AssetNode {
    /// Create a node with every scalar at the neutral default of 0.5.
    pub fn new(id: impl Into<String>, kind: AssetKind) -> Self {
        Self {
            id: id.into(),
            kind,
            exposure: 0.5,
            weakness: 0.5,
            controls: 0.5,
            value: 0.5,
            metadata: BTreeMap::new(),
        }
    }
}

/// A feasible attacker transition between two assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionEdge {
    pub source: String,
    pub target: String,
    pub kind: TransitionKind,
    pub likelihood: f64,
    pub difficulty: f64,
    pub detectability: f64,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl TransitionEdge {
    /// Create an edge with every scalar at the neutral default of 0.5.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        kind: TransitionKind,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
            likelihood: 0.5,
            difficulty: 0.5,
            detectability: 0.5,
            metadata: BTreeMap::new(),
        }
    }
}

/// Graph-level statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub node_kinds: BTreeMap<String, usize>,
    pub edge_kinds: BTreeMap<String, usize>,
    pub avg_exposure: f64,
    pub avg_weakness: f64,
    pub avg_controls: f64,
}
