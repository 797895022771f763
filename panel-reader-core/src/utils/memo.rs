//! 会话级缓存值
//!
//! 首次读取时计算，调用 [`Memo::invalidate`] 后才会重新计算。

use std::cell::OnceCell;

/// 惰性计算、可手动失效的缓存
#[derive(Debug, Clone, Default)]
pub struct Memo<T> {
    cell: OnceCell<T>,
}

impl<T> Memo<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// 读取缓存值，首次读取时用 `init` 计算
    pub fn get_or_compute(&self, init: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(init)
    }

    /// 丢弃缓存值
    pub fn invalidate(&mut self) {
        self.cell.take();
    }
}
