//! 批量抓取应用 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口：抓取全部页面、写出 CSV、输出统计。
//!
//! ## 核心功能
//!
//! 1. **构建能力**：根据配置创建提取器和渲染器
//! 2. **批量抓取**：委托 `page_driver` 顺序处理所有页面
//! 3. **写出结果**：记录为空时不写文件，写入失败只报告不中断
//! 4. **统计输出**：汇总页数、记录数，并展示样例数据

use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::orchestrator::page_driver::{run_pages, ScrapeReport};
use crate::services::{ChromeRenderer, CsvWriter, MovieExtractor, PageRenderer, WriteOutcome};
use crate::utils::logging::{log_startup, print_final_stats, print_sample};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 使用 Chromium 渲染器运行
    pub async fn run(&self) -> AppResult<ScrapeReport> {
        let renderer = ChromeRenderer::new(self.config.clone());
        self.run_with(&renderer).await
    }

    /// 使用指定渲染器运行：抓取 → 写出 → 统计
    ///
    /// 只有提取器无法构建（基础 URL 无效）时返回错误
    pub async fn run_with<R: PageRenderer>(&self, renderer: &R) -> AppResult<ScrapeReport> {
        log_startup(&self.config);

        let extractor = MovieExtractor::new(&self.config.base_url)?;

        let report = run_pages(
            renderer,
            &extractor,
            self.config.page_count,
            |index| self.config.page_url(index),
            self.config.page_delay(),
        )
        .await;

        print_final_stats(
            report.stats.rendered(),
            report.stats.failed,
            report.movies.len(),
        );

        self.save(&report);
        print_sample(&report.movies, self.config.sample_size);

        Ok(report)
    }

    fn save(&self, report: &ScrapeReport) {
        let writer = CsvWriter::with_path(&self.config.output_file);
        match writer.write(&report.movies) {
            Ok(WriteOutcome::Written { path, rows }) => {
                info!("✓ 成功保存 {} 条电影记录到 {}", rows, path);
            }
            Ok(WriteOutcome::Skipped) => {
                warn!("⚠️ 没有可保存的电影记录，未生成 {}", writer.path());
            }
            Err(e) => {
                error!("✗ 保存 CSV 失败: {}", e);
            }
        }
    }
}
