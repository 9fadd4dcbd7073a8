//! 单链表
//!
//! 链表持有头节点，并通过头节点传递地持有整条链。`count` 缓存始终等于
//! 从头节点出发可达的节点数，每个修改操作都同步维护它。

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sll_config::LIST_TARGET;
use tracing::{debug, trace};

use crate::error::{ListError, Result};
use crate::node::{Link, Node, Value};

/// 持有节点链的单链表
#[derive(Default)]
pub struct List {
    pub(crate) head: Link,
    pub(crate) count: usize,
}

impl List {
    /// 创建空链表
    pub fn new() -> Self {
        List {
            head: None,
            count: 0,
        }
    }

    /// 头节点为空时链表为空，O(1)
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// 缓存的节点数，O(1)
    pub fn length(&self) -> usize {
        self.count
    }

    /// 遍历整条链重新计数，O(n)
    ///
    /// 用于和 [`List::length`] 交叉校验。
    pub fn size(&self) -> usize {
        let mut current = self.head.as_deref();
        let mut size = 0;
        while let Some(node) = current {
            size += 1;
            current = node.next.as_deref();
        }
        size
    }

    /// 头节点
    pub fn head(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    /// 在链表头部插入新节点（prepend），O(1)
    ///
    /// 注意：连续调用 `add` 得到的链表顺序与调用顺序相反。
    pub fn add(&mut self, data: Value) {
        let old_head = self.head.take();
        self.head = Some(Node::with_next(data, old_head));
        self.count += 1;
        trace!(target: LIST_TARGET, data, count = self.count, "add");
    }

    /// 查找第一个值等于 `key` 的节点，O(n)
    pub fn search(&self, key: Value) -> Option<&Node> {
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            if node.data == key {
                return Some(node);
            }
            current = node.next.as_deref();
        }
        None
    }

    /// 返回下标 `index`（从 0 开始）处的节点，O(n)
    ///
    /// 不做越界检查：空链表或越过链尾时返回 `None`。
    pub fn node_at_index(&self, index: usize) -> Option<&Node> {
        let mut current = self.head.as_deref();
        for _ in 0..index {
            current = current?.next.as_deref();
        }
        current
    }

    fn node_at_index_mut(&mut self, index: usize) -> Option<&mut Node> {
        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current?.next.as_deref_mut();
        }
        current
    }

    /// 在 `index` 处插入新节点，O(n)
    ///
    /// `index` 必须是已存在的位置：`index >= length()` 返回
    /// [`ListError::IndexOutOfRange`]，因此不支持在链尾之后追加，
    /// 对空链表的任何插入也会失败。`index == 0` 等价于 [`List::add`]。
    pub fn insert(&mut self, data: Value, index: usize) -> Result<()> {
        let count = self.count;
        let out_of_range = ListError::IndexOutOfRange { index, count };
        if index >= count {
            debug!(target: LIST_TARGET, index, count, "insert rejected");
            return Err(out_of_range);
        }

        if index == 0 {
            self.add(data);
            return Ok(());
        }

        let previous = self.node_at_index_mut(index - 1).ok_or(out_of_range)?;
        // 后继可能为空（index == count - 1）
        let successor = previous.next.take();
        previous.next = Some(Node::with_next(data, successor));
        self.count += 1;
        trace!(target: LIST_TARGET, data, index, count = self.count, "insert");
        Ok(())
    }

    /// 移除并返回第一个值等于 `key` 的节点，O(n)
    ///
    /// 返回的节点已脱链。`key` 不存在时返回 `None`，链表不变。
    pub fn remove(&mut self, key: Value) -> Option<Box<Node>> {
        if self.head.as_ref()?.data == key {
            let mut node = self.head.take()?;
            self.head = node.next.take();
            self.count -= 1;
            trace!(target: LIST_TARGET, key, index = 0, count = self.count, "remove");
            return Some(node);
        }

        let mut previous = self.head.as_deref_mut()?;
        let mut index: usize = 1;
        loop {
            let found = previous.next.as_ref()?.data == key;
            if found {
                let mut node = previous.next.take()?;
                previous.next = node.next.take();
                self.count -= 1;
                trace!(target: LIST_TARGET, key, index, count = self.count, "remove");
                return Some(node);
            }
            previous = previous.next.as_deref_mut()?;
            index += 1;
        }
    }

    /// 移除并返回 `index` 处的节点，O(n)
    ///
    /// `index >= length()` 返回 [`ListError::IndexOutOfRange`]，链表不变。
    pub fn remove_at_index(&mut self, index: usize) -> Result<Box<Node>> {
        let count = self.count;
        let out_of_range = ListError::IndexOutOfRange { index, count };
        if index >= count {
            debug!(target: LIST_TARGET, index, count, "remove_at_index rejected");
            return Err(out_of_range);
        }

        if index == 0 {
            let mut node = self.head.take().ok_or(out_of_range)?;
            self.head = node.next.take();
            self.count -= 1;
            trace!(target: LIST_TARGET, index, count = self.count, "remove_at_index");
            return Ok(node);
        }

        let previous = self.node_at_index_mut(index - 1).ok_or(out_of_range)?;
        let mut node = previous.next.take().ok_or(out_of_range)?;
        // 移除最后一个节点时后继为空，直接接上 None
        previous.next = node.next.take();
        self.count -= 1;
        trace!(target: LIST_TARGET, index, count = self.count, "remove_at_index");
        Ok(node)
    }

    /// 释放所有节点
    pub fn clear(&mut self) {
        self.head = None;
        self.count = 0;
    }

    /// 按从头到尾的顺序遍历节点值
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// 收集所有节点值
    pub fn values(&self) -> Vec<Value> {
        self.iter().collect()
    }

    /// 带头尾标注的可读字符串，O(n)
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

/// 节点值迭代器
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node.data)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// 按迭代顺序建表：第一个元素成为头节点
impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut list = List::new();
        let mut count = 0;
        let mut tail = &mut list.head;
        for data in iter {
            tail = &mut tail.insert(Node::with_next(data, None)).next;
            count += 1;
        }
        list.count = count;
        list
    }
}

impl Clone for List {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for List {}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current = self.head.as_deref();
        let mut is_head = true;
        while let Some(node) = current {
            if is_head {
                write!(f, "[Head {}]-> ", node.data)?;
            } else if node.next.is_none() {
                write!(f, "[Tail {}]", node.data)?;
            } else {
                write!(f, "[{}]-> ", node.data)?;
            }
            is_head = false;
            current = node.next.as_deref();
        }
        Ok(())
    }
}

impl Serialize for List {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for List {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let values = Vec::<Value>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}
