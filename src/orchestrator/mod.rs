//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 应用入口
//! - 创建提取器与渲染器
//! - 写出 CSV、输出统计与样例
//!
//! ### `page_driver` - 批量页面驱动
//! - 顺序遍历页码，隔离单页失败
//! - 页间固定间隔
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (整个运行)
//!     ↓
//! page_driver (处理 1..=N 页)
//!     ↓
//! workflow::PageFlow (处理单页)
//!     ↓
//! services (能力层：render / extract / csv)
//!     ↓
//! infrastructure (基础设施：BrowserSession)
//! ```

pub mod batch_processor;
pub mod page_driver;

// 重新导出主要类型
pub use batch_processor::App;
pub use page_driver::{run_pages, PageStats, ScrapeReport};
