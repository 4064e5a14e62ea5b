//! 页面渲染服务 - 业务能力层
//!
//! 只负责"拿到第 N 页渲染后的 HTML"，不解析内容

use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::error::BrowserError;
use crate::infrastructure::BrowserSession;
use crate::services::movie_extractor::ITEM_SELECTOR;

/// 页面渲染能力
///
/// 批量驱动只依赖这个 trait，测试中可以替换为固定的 HTML
#[allow(async_fn_in_trait)]
pub trait PageRenderer {
    /// 返回第 `page_index` 页（从 1 开始）渲染后的 HTML
    async fn render(&self, page_index: u32) -> Result<String, BrowserError>;
}

/// 基于 Chromium 的渲染器，每页一个独立会话
pub struct ChromeRenderer {
    config: Config,
}

impl ChromeRenderer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    async fn fetch(
        session: &BrowserSession,
        url: &str,
        wait_timeout: Duration,
    ) -> Result<String, BrowserError> {
        session.navigate(url).await?;
        session.wait_for(ITEM_SELECTOR, wait_timeout).await?;
        let markup = session.current_markup().await?;
        debug!("页面内容长度: {}", markup.len());
        Ok(markup)
    }
}

impl PageRenderer for ChromeRenderer {
    async fn render(&self, page_index: u32) -> Result<String, BrowserError> {
        let url = self.config.page_url(page_index);
        debug!("渲染第 {} 页: {}", page_index, url);

        let session = BrowserSession::launch(&self.config).await?;
        let result = Self::fetch(&session, &url, self.config.wait_timeout()).await;
        // 无论成功与否都关闭会话
        session.close().await;

        result
    }
}
