//! 链表节点

use std::fmt;

/// 节点中存放的标量类型
pub type Value = i64;

/// 指向下一个节点的所有权链接
pub(crate) type Link = Option<Box<Node>>;

/// 单个存储单元：一个值和一条指向后继的链接
///
/// 节点从不被别名：链接只有一个持有者（前驱节点或链表头）。
/// 从链表中移除的节点总是处于脱链状态（`next()` 为 `None`）。
pub struct Node {
    pub(crate) data: Value,
    pub(crate) next: Link,
}

impl Node {
    /// 创建一个脱链节点
    pub fn new(data: Value) -> Self {
        Node { data, next: None }
    }

    pub(crate) fn with_next(data: Value, next: Link) -> Box<Self> {
        Box::new(Node { data, next })
    }

    /// 节点的值
    pub fn data(&self) -> Value {
        self.data
    }

    /// 后继节点
    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }

    /// 是否为链尾
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }

    /// 调试用的单节点描述
    pub fn describe(&self) -> String {
        format!("Node data:{}", self.data)
    }
}

// 默认析构会沿链递归，长链会爆栈；这里逐个摘下后继再释放
impl Drop for Node {
    fn drop(&mut self) {
        let mut link = self.next.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

// 只打印本节点，避免沿链递归
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node data:{}", self.data)
    }
}
