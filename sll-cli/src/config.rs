//! CLI 配置
//!
//! 包含 CLI 特有的配置：分阶段日志级别和排序配置的组合

use sll_config::{MergeCount, SortConfig, LIST_TARGET, SORT_TARGET};
use tracing::Level;

/// CLI 自身的日志 target
pub const CLI_TARGET: &str = "sll::cli";

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub list: Option<Level>,
    pub sort: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            list: None,
            sort: None,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            LIST_TARGET => self.list.unwrap_or(self.global),
            SORT_TARGET => self.sort.unwrap_or(self.global),
            _ => self.global,
        }
    }
}

/// 根据 `--recount` 选择合并计数策略
pub fn sort_config(recount: bool) -> SortConfig {
    SortConfig {
        merge_count: if recount {
            MergeCount::Recount
        } else {
            MergeCount::Accumulate
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_falls_back_to_global() {
        let cfg = LogConfig {
            global: Level::INFO,
            list: Some(Level::TRACE),
            sort: None,
        };
        assert_eq!(cfg.level_for(LIST_TARGET), Level::TRACE);
        assert_eq!(cfg.level_for(SORT_TARGET), Level::INFO);
        assert_eq!(cfg.level_for(CLI_TARGET), Level::INFO);
    }

    #[test]
    fn test_sort_config_from_flag() {
        assert_eq!(sort_config(true).merge_count, MergeCount::Recount);
        assert_eq!(sort_config(false), SortConfig::default());
    }
}
