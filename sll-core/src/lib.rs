//! sll Core - singly-linked list (pure logic, no IO)
//!
//! Contains the node type, the owning list with its positional and keyed
//! operations, and the split/merge based merge sort.
//!
//! Configuration is passed explicitly via parameters, not via global state.
//! Operations log through `tracing` under the targets named in `sll-config`.

pub mod error;
pub mod list;
pub mod node;
pub mod sort;

// Re-export common types
pub use error::{ListError, Result};
pub use list::{Iter, List};
pub use node::{Node, Value};
pub use sort::{merge, merge_sort, merge_sort_with, merge_with, split};

// Re-export config types from sll-config
pub use sll_config::{MergeCount, Phase, SortConfig};
