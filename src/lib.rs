//! # Movie Scraper
//!
//! 从 JavaScript 渲染的分页电影列表中抓取片名、海报、评分、类型，并写出 CSV
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `browser/` - 启动 Chromium（无头或可见）
//! - `BrowserSession` - 每页一个会话，唯一的 page owner，用完即关
//!
//! ### ② 业务能力层（Services）
//! - `PageRenderer` - 拿到第 N 页渲染后的 HTML
//! - `MovieExtractor` - HTML → `Vec<Movie>`
//! - `CsvWriter` - 写 CSV 能力
//!
//! ### ③ 流程层（Workflow）
//! - `PageCtx` - 上下文封装（页码 + 总页数）
//! - `PageFlow` - 单页流程（render → extract）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/page_driver` - 顺序抓取所有页面，隔离单页失败
//! - `orchestrator/batch_processor` - 应用入口，写出结果与统计

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::BrowserSession;
pub use models::Movie;
pub use orchestrator::{run_pages, App, ScrapeReport};
pub use services::{ChromeRenderer, CsvWriter, MovieExtractor, PageRenderer};
pub use workflow::{PageCtx, PageFlow, PageOutcome};
