//! 浏览器会话 - 基础设施层
//!
//! 每一页使用一个全新的浏览器会话，用完立即关闭

use std::time::Duration;

use chromiumoxide::{Browser, Page};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout};
use tracing::{debug, warn};

use crate::browser;
use crate::config::Config;
use crate::error::BrowserError;

/// 轮询 DOM 的间隔
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// 浏览器会话
///
/// 职责：
/// - 持有唯一的 Browser 和 Page
/// - 只暴露 navigate / wait_for / current_markup 能力
/// - 不认识 Movie，不解析页面
///
/// 优先调用 [`BrowserSession::close`]；若未调用（例如发生 panic），
/// `Drop` 会在后台关闭浏览器。
pub struct BrowserSession {
    browser: Option<Browser>,
    page: Page,
    handler_task: Option<JoinHandle<()>>,
    runtime_handle: Handle,
}

impl BrowserSession {
    /// 启动浏览器并打开一个空白页
    pub async fn launch(config: &Config) -> Result<Self, BrowserError> {
        let (mut browser, handler_task) = browser::launch_browser(config).await?;

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(source) => {
                shutdown(&mut browser).await;
                handler_task.abort();
                return Err(BrowserError::PageCreation { source });
            }
        };

        Ok(Self {
            browser: Some(browser),
            page,
            handler_task: Some(handler_task),
            runtime_handle: Handle::current(),
        })
    }

    /// 导航到指定 URL
    pub async fn navigate(&self, url: &str) -> Result<(), BrowserError> {
        debug!("导航到: {}", url);
        self.page
            .goto(url)
            .await
            .map_err(|source| BrowserError::Navigation {
                url: url.to_string(),
                source,
            })?;
        Ok(())
    }

    /// 等待至少一个元素匹配 `selector`，超过 `limit` 视为超时
    pub async fn wait_for(&self, selector: &str, limit: Duration) -> Result<(), BrowserError> {
        let poll = async {
            loop {
                match self.page.find_elements(selector).await {
                    Ok(elements) if !elements.is_empty() => {
                        debug!("'{}' 已出现 {} 个", selector, elements.len());
                        return;
                    }
                    Ok(_) => {}
                    Err(e) => debug!("查询 '{}' 失败，继续等待: {}", selector, e),
                }
                sleep(POLL_INTERVAL).await;
            }
        };

        timeout(limit, poll)
            .await
            .map_err(|_| BrowserError::WaitTimeout {
                selector: selector.to_string(),
                timeout: limit,
            })
    }

    /// 当前渲染后的完整 HTML
    pub async fn current_markup(&self) -> Result<String, BrowserError> {
        self.page
            .content()
            .await
            .map_err(|source| BrowserError::Markup { source })
    }

    /// 关闭浏览器并回收后台任务
    pub async fn close(mut self) {
        if let Some(mut browser) = self.browser.take() {
            shutdown(&mut browser).await;
        }
        if let Some(task) = self.handler_task.take() {
            task.abort();
        }
        debug!("浏览器会话已关闭");
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        let task = self.handler_task.take();
        if let Some(mut browser) = self.browser.take() {
            warn!("浏览器会话未显式关闭，后台关闭中");
            self.runtime_handle.spawn(async move {
                shutdown(&mut browser).await;
                if let Some(task) = task {
                    task.abort();
                }
            });
        } else if let Some(task) = task {
            task.abort();
        }
    }
}

async fn shutdown(browser: &mut Browser) {
    if let Err(e) = browser.close().await {
        warn!("关闭浏览器失败: {}", e);
    }
    if let Err(e) = browser.wait().await {
        warn!("等待浏览器进程退出失败: {}", e);
    }
}
