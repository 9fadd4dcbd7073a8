//! 链表错误类型
//!
//! 只有按下标修改链表的操作会失败；查找类操作用 `Option` 表示“未找到”。

use thiserror::Error;

/// 链表操作错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// 下标不是已存在的位置（`index >= count`）
    #[error("index {index} out of range for list of length {count}")]
    IndexOutOfRange { index: usize, count: usize },
}

impl ListError {
    /// 获取出错的下标
    pub fn index(&self) -> usize {
        match self {
            ListError::IndexOutOfRange { index, .. } => *index,
        }
    }
}

/// 链表结果类型
pub type Result<T> = std::result::Result<T, ListError>;
