//! 批量页面驱动 - 编排层
//!
//! ## 职责
//!
//! 按页码 1..=N 顺序执行单页流程，汇总所有记录。
//!
//! - 一页渲染失败只记录日志，继续下一页，不重试
//! - 两页之间固定等待 `delay`（最后一页之后不等待）
//! - 除了结果列表，页与页之间不共享任何状态

use std::time::Duration;

use tokio::time::sleep;
use tracing::error;

use crate::models::Movie;
use crate::services::{MovieExtractor, PageRenderer};
use crate::utils::logging::{log_page_complete, log_page_start};
use crate::workflow::{PageCtx, PageFlow, PageOutcome};

/// 页面统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PageStats {
    /// 提取到记录的页数
    pub extracted: usize,
    /// 渲染成功但没有记录的页数
    pub empty: usize,
    /// 渲染失败的页数
    pub failed: usize,
}

impl PageStats {
    pub fn rendered(&self) -> usize {
        self.extracted + self.empty
    }
}

/// 一次运行的结果
#[derive(Debug, Default)]
pub struct ScrapeReport {
    /// 按页序、页内文档顺序排列的记录
    pub movies: Vec<Movie>,
    pub stats: PageStats,
}

/// 顺序抓取第 1..=`page_count` 页
///
/// `page_count` 为 0 时直接返回空结果
pub async fn run_pages<R: PageRenderer>(
    renderer: &R,
    extractor: &MovieExtractor,
    page_count: u32,
    page_url: impl Fn(u32) -> String,
    delay: Duration,
) -> ScrapeReport {
    let flow = PageFlow::new(renderer, extractor);
    let mut report = ScrapeReport::default();

    for page_index in 1..=page_count {
        let ctx = PageCtx::new(page_index, page_count);
        log_page_start(&ctx, &page_url(page_index));

        match flow.run(&ctx).await {
            Ok(PageOutcome::Extracted(movies)) => {
                report.stats.extracted += 1;
                let found = movies.len();
                report.movies.extend(movies);
                log_page_complete(&ctx, found, report.movies.len());
            }
            Ok(PageOutcome::Empty) => {
                report.stats.empty += 1;
            }
            Err(e) => {
                report.stats.failed += 1;
                error!("{} ✗ 抓取失败: {}", ctx, e);
            }
        }

        if !ctx.is_last() && !delay.is_zero() {
            sleep(delay).await;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BrowserError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    const BASE: &str = "https://ssr1.scrape.center";

    /// 按页码返回固定 HTML；未登记的页码模拟超时
    #[derive(Default)]
    struct FakeRenderer {
        pages: HashMap<u32, String>,
        calls: RefCell<Vec<u32>>,
    }

    impl FakeRenderer {
        fn with_page(mut self, index: u32, markup: impl Into<String>) -> Self {
            self.pages.insert(index, markup.into());
            self
        }
    }

    impl PageRenderer for FakeRenderer {
        async fn render(&self, page_index: u32) -> Result<String, BrowserError> {
            self.calls.borrow_mut().push(page_index);
            self.pages
                .get(&page_index)
                .cloned()
                .ok_or_else(|| BrowserError::WaitTimeout {
                    selector: "div.item".to_string(),
                    timeout: Duration::from_secs(10),
                })
        }
    }

    fn items(names: &[&str]) -> String {
        names
            .iter()
            .map(|name| {
                format!(
                    r#"<div class="item"><a class="name" href="/detail/{name}"><img src="/img/{name}.jpg"><h2>{name}</h2></a>
                       <p class="score">9.0</p><button class="category"><span>Drama</span></button></div>"#
                )
            })
            .collect()
    }

    fn url(index: u32) -> String {
        format!("{BASE}/page/{index}")
    }

    #[tokio::test]
    async fn failed_page_does_not_abort_the_run() {
        let renderer = FakeRenderer::default().with_page(1, items(&["A", "B", "C"]));
        let extractor = MovieExtractor::new(BASE).unwrap();

        let report = run_pages(&renderer, &extractor, 2, url, Duration::ZERO).await;

        assert_eq!(report.movies.len(), 3);
        assert_eq!(
            report.stats,
            PageStats {
                extracted: 1,
                empty: 0,
                failed: 1
            }
        );
        assert_eq!(*renderer.calls.borrow(), vec![1, 2]);
    }

    #[tokio::test]
    async fn records_keep_page_then_document_order() {
        let renderer = FakeRenderer::default()
            .with_page(1, items(&["A", "B"]))
            .with_page(2, "<html><body>no items</body></html>")
            .with_page(3, items(&["C"]));
        let extractor = MovieExtractor::new(BASE).unwrap();

        let report = run_pages(&renderer, &extractor, 3, url, Duration::ZERO).await;

        let names: Vec<_> = report.movies.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(report.stats.empty, 1);
        assert_eq!(report.stats.rendered(), 3);
        assert_eq!(report.movies[0].image_url, "https://ssr1.scrape.center/img/A.jpg");
        assert_eq!(report.movies[0].genre, "Drama");
    }

    #[tokio::test]
    async fn zero_pages_renders_nothing() {
        let renderer = FakeRenderer::default().with_page(1, items(&["A"]));
        let extractor = MovieExtractor::new(BASE).unwrap();

        let report = run_pages(&renderer, &extractor, 0, url, Duration::ZERO).await;

        assert!(report.movies.is_empty());
        assert!(renderer.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn pauses_between_pages_but_not_after_the_last() {
        let renderer = FakeRenderer::default()
            .with_page(1, items(&["A"]))
            .with_page(2, items(&["B"]));
        let extractor = MovieExtractor::new(BASE).unwrap();

        let started = std::time::Instant::now();
        let report = run_pages(&renderer, &extractor, 2, url, Duration::from_millis(200)).await;
        let elapsed = started.elapsed();

        assert_eq!(report.movies.len(), 2);
        assert!(elapsed >= Duration::from_millis(200));
        assert!(elapsed < Duration::from_millis(400));
    }
}
