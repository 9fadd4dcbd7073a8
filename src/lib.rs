//! sll - an owned singly-linked list with merge sort
//!
//! # Architecture
//!
//! ```text
//! sll-config/  - Pure configuration data (sort strategy, log targets)
//! sll-core/    - Node, List and merge sort (no IO)
//! sll-cli/     - `sll` binary (clap, JSON scripts, tracing-subscriber)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use sll_workspace::List;
//!
//! let mut list = List::new();
//! list.add(3);
//! list.add(1);
//! list.add(2);
//! assert_eq!(list.values(), vec![2, 1, 3]);
//!
//! let sorted = list.merge_sort();
//! assert_eq!(sorted.values(), vec![1, 2, 3]);
//! ```

pub use sll_config;
pub use sll_core;

// 重导出常用类型
pub use sll_config::{MergeCount, Phase, SortConfig};
pub use sll_core::{merge, merge_sort, merge_sort_with, split, List, ListError, Node, Value};
