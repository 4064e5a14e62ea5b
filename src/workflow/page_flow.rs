//! 单页处理流程
//!
//! render → extract，一页的完整流程

use tracing::warn;

use crate::error::BrowserError;
use crate::models::Movie;
use crate::services::{MovieExtractor, PageRenderer};
use crate::workflow::PageCtx;

/// 单页处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// 提取到至少一条记录
    Extracted(Vec<Movie>),
    /// 页面渲染成功，但没有可用记录
    Empty,
}

impl PageOutcome {
    pub fn into_movies(self) -> Vec<Movie> {
        match self {
            PageOutcome::Extracted(movies) => movies,
            PageOutcome::Empty => Vec::new(),
        }
    }
}

/// 单页处理流程
///
/// 只编排，不持有浏览器；渲染失败原样返回给调用方
pub struct PageFlow<'a, R> {
    renderer: &'a R,
    extractor: &'a MovieExtractor,
}

impl<'a, R: PageRenderer> PageFlow<'a, R> {
    pub fn new(renderer: &'a R, extractor: &'a MovieExtractor) -> Self {
        Self {
            renderer,
            extractor,
        }
    }

    pub async fn run(&self, ctx: &PageCtx) -> Result<PageOutcome, BrowserError> {
        let markup = self.renderer.render(ctx.page_index).await?;

        let movies = self.extractor.extract(&markup);
        if movies.is_empty() {
            warn!("{} ⚠ 没有找到可用的电影条目", ctx);
            return Ok(PageOutcome::Empty);
        }

        Ok(PageOutcome::Extracted(movies))
    }
}
