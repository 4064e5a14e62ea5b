use std::path::Path;

use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::BrowserError;

/// 启动参数
///
/// 不使用 chromiumoxide 的默认参数列表，从而不会带上 `--enable-automation`
const LAUNCH_ARGS: &[&str] = &[
    "--no-sandbox",
    "--disable-dev-shm-usage",
    "--disable-blink-features=AutomationControlled",
    "--disable-gpu",
    "--no-first-run",
    "--no-default-browser-check",
    "--disable-background-networking",
    "--disable-popup-blocking",
    "--password-store=basic",
    "--use-mock-keychain",
];

/// 构建浏览器配置
pub fn browser_config(config: &Config) -> Result<BrowserConfig, BrowserError> {
    let mut builder = BrowserConfig::builder()
        .disable_default_args()
        .args(LAUNCH_ARGS.iter().copied());

    builder = if config.headless {
        builder.new_headless_mode()
    } else {
        builder.with_head()
    };

    if let Some(executable) = config.chrome_executable.as_deref() {
        builder = builder.chrome_executable(Path::new(executable));
    }

    builder.build().map_err(|message| {
        error!("配置浏览器失败: {}", message);
        BrowserError::Configuration { message }
    })
}

/// 启动浏览器，并在后台任务中处理 CDP 事件
///
/// 返回的 `JoinHandle` 由调用方持有，关闭浏览器后需要 abort
pub async fn launch_browser(config: &Config) -> Result<(Browser, JoinHandle<()>), BrowserError> {
    debug!(
        "🚀 启动浏览器 (headless: {}, executable: {:?})",
        config.headless, config.chrome_executable
    );

    let browser_config = browser_config(config)?;

    let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|source| {
        error!("启动浏览器失败: {}", source);
        BrowserError::Launch { source }
    })?;

    let handler_task = tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if event.is_err() {
                break;
            }
        }
    });

    info!("浏览器已启动");
    Ok((browser, handler_task))
}
