//! JSON 操作脚本
//!
//! 脚本描述初始值和一串链表操作，逐步执行并记录每一步的结果：
//!
//! ```json
//! {
//!   "values": [5, 6, 7],
//!   "steps": [
//!     { "op": "add", "value": 3 },
//!     { "op": "insert", "value": 9, "index": 1 },
//!     { "op": "remove", "key": 6 },
//!     { "op": "remove_at", "index": 0 },
//!     { "op": "search", "key": 7 },
//!     { "op": "at", "index": 2 },
//!     { "op": "sort" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use sll_core::{List, Node, SortConfig, Value};
use tracing::{debug, info};

use crate::config::CLI_TARGET;

/// 操作脚本
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    /// 初始值（按给出顺序建表，第一个值为头节点）
    #[serde(default)]
    pub values: Vec<Value>,
    /// 覆盖命令行的排序配置
    #[serde(default)]
    pub sort: Option<SortConfig>,
    /// 依次执行的操作
    pub steps: Vec<Step>,
}

/// 单个链表操作
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Add { value: Value },
    Insert { value: Value, index: usize },
    Remove { key: Value },
    RemoveAt { index: usize },
    Search { key: Value },
    At { index: usize },
    Sort,
}

/// 单步执行结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Done,
    Found { value: Value },
    NotFound,
    Removed { value: Value },
    Rejected { message: String },
}

/// 单步报告：操作、结果和执行后的链表
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub op: Step,
    pub outcome: Outcome,
    pub list: List,
    pub length: usize,
    pub size: usize,
}

/// 读取并解析脚本文件
pub fn read_script(path: &Path) -> Result<Script, String> {
    if !path.exists() {
        return Err(format!("script '{}' not found", path.display()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;

    parse_script(&content).map_err(|e| format!("failed to parse '{}': {}", path.display(), e))
}

/// 从 JSON 文本解析脚本
pub fn parse_script(content: &str) -> Result<Script, serde_json::Error> {
    serde_json::from_str(content)
}

/// 执行脚本，返回每一步的报告
///
/// 越界错误不会中断脚本：该步记为 `Rejected`，链表保持不变。
pub fn run_script(script: &Script, config: &SortConfig) -> Vec<StepReport> {
    let config = script.sort.as_ref().unwrap_or(config);
    let mut list: List = script.values.iter().copied().collect();
    info!(target: CLI_TARGET, steps = script.steps.len(), length = list.length(), "running script");

    let mut reports = Vec::with_capacity(script.steps.len());
    for (i, step) in script.steps.iter().enumerate() {
        let outcome = apply(&mut list, step, config);
        debug!(target: CLI_TARGET, step = i + 1, ?outcome, "step applied");
        reports.push(StepReport {
            step: i + 1,
            op: step.clone(),
            outcome,
            list: list.clone(),
            length: list.length(),
            size: list.size(),
        });
    }
    reports
}

fn apply(list: &mut List, step: &Step, config: &SortConfig) -> Outcome {
    match *step {
        Step::Add { value } => {
            list.add(value);
            Outcome::Done
        }
        Step::Insert { value, index } => match list.insert(value, index) {
            Ok(()) => Outcome::Done,
            Err(e) => Outcome::Rejected {
                message: e.to_string(),
            },
        },
        Step::Remove { key } => match list.remove(key) {
            Some(node) => Outcome::Removed { value: node.data() },
            None => Outcome::NotFound,
        },
        Step::RemoveAt { index } => match list.remove_at_index(index) {
            Ok(node) => Outcome::Removed { value: node.data() },
            Err(e) => Outcome::Rejected {
                message: e.to_string(),
            },
        },
        Step::Search { key } => found(list.search(key)),
        Step::At { index } => found(list.node_at_index(index)),
        Step::Sort => {
            *list = std::mem::take(list).sorted_with(config);
            Outcome::Done
        }
    }
}

fn found(node: Option<&Node>) -> Outcome {
    match node {
        Some(node) => Outcome::Found { value: node.data() },
        None => Outcome::NotFound,
    }
}
