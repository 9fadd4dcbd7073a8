//! 归并排序
//!
//! `split` 在中点切断链表，`merge` 借助哨兵节点把两条有序链重新串接。
//! 三个函数都按值接收链表：节点的所有权转移到返回的链表中，
//! 调用方无法再使用传入的链表。

use sll_config::{MergeCount, SortConfig, SORT_TARGET};
use tracing::debug;

use crate::list::List;
use crate::node::Node;

/// 升序排序，O(n log n)
///
/// 空链表和单节点链表原样返回。节点只重新链接，不复制。
pub fn merge_sort(list: List) -> List {
    merge_sort_with(list, &SortConfig::default())
}

/// 使用显式配置的 [`merge_sort`]
pub fn merge_sort_with(list: List, config: &SortConfig) -> List {
    let single_or_empty = list.head.as_ref().map_or(true, |head| head.next.is_none());
    if single_or_empty {
        return list;
    }

    debug!(target: SORT_TARGET, length = list.count, "merge_sort");
    let (left, right) = split(list);
    let left = merge_sort_with(left, config);
    let right = merge_sort_with(right.unwrap_or_default(), config);
    merge_with(left, right, config.merge_count)
}

/// 在中点把链表切成左右两半
///
/// 空链表返回 `(list, None)`。否则 `mid = size / 2`，下标 `mid - 1`
/// 的节点成为左半部分的链尾（`mid` 为 0 时取头节点），其后继成为右半部分的头。
///
/// | size | left | right |
/// |------|------|-------|
/// | 1 | `[a]` | `[]` |
/// | 2 | `[a]` | `[b]` |
/// | 3 | `[a]` | `[b, c]` |
/// | 4 | `[a, b]` | `[c, d]` |
pub fn split(mut list: List) -> (List, Option<List>) {
    if list.head.is_none() {
        return (list, None);
    }

    let size = list.size();
    let left_len = (size / 2).max(1);
    let right_head = list
        .head
        .as_deref_mut()
        .and_then(|head| {
            let mut last_left = head;
            for _ in 1..left_len {
                last_left = last_left.next.as_deref_mut()?;
            }
            Some(last_left)
        })
        .and_then(|last_left| last_left.next.take());

    list.count = left_len;
    let right = List {
        head: right_head,
        count: size - left_len,
    };
    debug!(target: SORT_TARGET, size, left = list.count, right = right.count, "split");
    (list, Some(right))
}

/// 合并两条有序链表，O(n)
///
/// 右侧节点严格小于左侧节点时才取右侧，相等时取左侧，因此合并是稳定的。
pub fn merge(left: List, right: List) -> List {
    merge_with(left, right, MergeCount::default())
}

/// 使用指定计数策略的 [`merge`]
pub fn merge_with(mut left: List, mut right: List, strategy: MergeCount) -> List {
    // 哨兵只用来简化第一次拼接，返回前丢弃
    let mut sentinel = Node::new(0);
    let mut tail = &mut sentinel;

    let mut left_cursor = left.head.take();
    let mut right_cursor = right.head.take();
    let (mut taken_left, mut taken_right) = (0, 0);

    loop {
        let take_right = match (&left_cursor, &right_cursor) {
            (Some(l), Some(r)) => r.data < l.data,
            _ => break,
        };
        let (cursor, taken) = if take_right {
            (&mut right_cursor, &mut taken_right)
        } else {
            (&mut left_cursor, &mut taken_left)
        };
        let Some(mut node) = cursor.take() else {
            break;
        };
        *cursor = node.next.take();
        *taken += 1;
        tail = &mut **tail.next.insert(node);
    }

    // 一侧耗尽后，另一侧剩余的链整体接上
    let remainder = if left_cursor.is_some() {
        left.count.saturating_sub(taken_left)
    } else {
        right.count.saturating_sub(taken_right)
    };
    tail.next = left_cursor.or(right_cursor);

    let mut merged = List {
        head: sentinel.next.take(),
        count: 0,
    };
    merged.count = match strategy {
        MergeCount::Accumulate => taken_left + taken_right + remainder,
        MergeCount::Recount => merged.size(),
    };
    debug!(target: SORT_TARGET, count = merged.count, ?strategy, "merge");
    merged
}

impl List {
    /// 归并排序，消耗原链表
    pub fn merge_sort(self) -> List {
        merge_sort(self)
    }

    /// 使用显式配置的归并排序
    pub fn sorted_with(self, config: &SortConfig) -> List {
        merge_sort_with(self, config)
    }
}
