//! Data structures shared across the engine.
//! FxHashMap/FxHashSet, SmallVec aliases, ordered metadata maps.

pub mod collections;

pub use collections::{FxHashMap, FxHashSet, SmallVec8};
