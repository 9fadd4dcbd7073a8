//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

#![allow(dead_code)]

use sll_workspace::{List, ListError, Value};

/// 端到端测试中的一次操作
#[derive(Debug, Clone, Copy)]
pub enum Op {
    Add(Value),
    Insert(Value, usize),
    Remove(Value),
    RemoveAt(usize),
}

/// 依次执行操作，每一步后校验计数一致；返回越界错误的个数
pub fn apply_all(list: &mut List, ops: &[Op]) -> usize {
    let mut rejected = 0;
    for op in ops {
        let result: Result<(), ListError> = match *op {
            Op::Add(value) => {
                list.add(value);
                Ok(())
            }
            Op::Insert(value, index) => list.insert(value, index),
            Op::Remove(key) => {
                list.remove(key);
                Ok(())
            }
            Op::RemoveAt(index) => list.remove_at_index(index).map(drop),
        };
        if result.is_err() {
            rejected += 1;
        }
        assert_eq!(list.length(), list.size(), "count drifted after {op:?}");
    }
    rejected
}
