//! 测试辅助工具
//!
//! 提供链表构造和一致性校验的辅助函数

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sll_core::{List, Value};

/// 用连续的 `add` 建表（得到的顺序与输入相反）
pub fn build_by_adds(values: &[Value]) -> List {
    let mut list = List::new();
    for &value in values {
        list.add(value);
    }
    list
}

/// 校验缓存计数与遍历计数一致
pub fn assert_consistent(list: &List) {
    assert_eq!(
        list.length(),
        list.size(),
        "cached count drifted from chain: {:?}",
        list
    );
    assert_eq!(list.is_empty(), list.length() == 0);
}

/// 固定种子的随机数生成器
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// 生成指定长度的随机值序列
pub fn random_values(rng: &mut StdRng, len: usize, range: std::ops::RangeInclusive<Value>) -> Vec<Value> {
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}
