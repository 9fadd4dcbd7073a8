//! sll Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all sll crates.

use serde::{Deserialize, Serialize};

/// Log target for list mutations and queries
pub const LIST_TARGET: &str = "sll::list";

/// Log target for split / merge / merge sort
pub const SORT_TARGET: &str = "sll::sort";

/// How `merge` establishes the node count of the merged list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeCount {
    /// Tally nodes while splicing, plus whatever the remainder side still held
    #[default]
    Accumulate,
    /// Walk the merged chain once it is complete
    Recount,
}

/// Configuration for sorting behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Count strategy used by every merge step
    #[serde(default)]
    pub merge_count: MergeCount,
}

impl SortConfig {
    /// Sort configuration that re-walks each merged list
    pub fn recount() -> Self {
        Self {
            merge_count: MergeCount::Recount,
        }
    }
}

/// Phase enum for phase-specific log configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    List,
    Sort,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::List => "list",
            Phase::Sort => "sort",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> &'static str {
        match self {
            Phase::List => LIST_TARGET,
            Phase::Sort => SORT_TARGET,
        }
    }
}
