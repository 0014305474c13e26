//! Shared constants for the Foray attack-path engine.

/// Foray version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default maximum number of ranked paths returned per query.
pub const DEFAULT_MAX_PATHS: usize = 10;

/// Default maximum path length (in nodes) for the search.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Node value above which a node counts as a high-value target
/// when a query names no explicit target.
pub const HIGH_VALUE_THRESHOLD: f64 = 0.7;

/// Default maximum number of recommendation entries per report.
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 5;

// ---- Scoring ----

/// Divisor that normalizes the raw composite risk (theoretical max ~2.0)
/// into [0, 1].
pub const RISK_NORMALIZER: f64 = 2.0;

/// Detectability assumed for a path whose hops matched no stored edge.
pub const DEFAULT_EDGE_DETECTABILITY: f64 = 0.5;

/// Risk score above which a path's nodes count as high-risk in
/// recommendation aggregation.
pub const HIGH_RISK_PATH_THRESHOLD: f64 = 0.5;

/// Path detectability below which the report flags a detection gap.
pub const LOW_DETECTABILITY_THRESHOLD: f64 = 0.3;

// ---- Risk classification thresholds ----

/// Critical: average probability above this AND max impact above
/// `CRITICAL_IMPACT_THRESHOLD`.
pub const CRITICAL_PROBABILITY_THRESHOLD: f64 = 0.5;
pub const CRITICAL_IMPACT_THRESHOLD: f64 = 0.7;

/// High: average probability above this OR max impact above
/// `HIGH_IMPACT_THRESHOLD`.
pub const HIGH_PROBABILITY_THRESHOLD: f64 = 0.3;
pub const HIGH_IMPACT_THRESHOLD: f64 = 0.6;

/// Medium: average probability above this OR max impact above
/// `MEDIUM_IMPACT_THRESHOLD`.
pub const MEDIUM_PROBABILITY_THRESHOLD: f64 = 0.1;
pub const MEDIUM_IMPACT_THRESHOLD: f64 = 0.4;
