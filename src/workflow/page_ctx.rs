//! 页面处理上下文
//!
//! 封装"我正在处理第几页、共几页"这一信息

use std::fmt::Display;

/// 页面处理上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCtx {
    /// 页码（从1开始）
    pub page_index: u32,

    /// 本次运行的总页数
    pub page_count: u32,
}

impl PageCtx {
    pub fn new(page_index: u32, page_count: u32) -> Self {
        Self {
            page_index,
            page_count,
        }
    }

    /// 是否是本次运行的最后一页
    pub fn is_last(&self) -> bool {
        self.page_index >= self.page_count
    }
}

impl Display for PageCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[第 {}/{} 页]", self.page_index, self.page_count)
    }
}
