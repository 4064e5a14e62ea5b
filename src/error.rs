use std::time::Duration;

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 浏览器相关错误
    #[error("浏览器错误: {0}")]
    Browser(#[from] BrowserError),
    /// 解析提取错误
    #[error("提取错误: {0}")]
    Extract(#[from] ExtractError),
    /// 输出文件错误
    #[error("输出错误: {0}")]
    Output(#[from] OutputError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 浏览器相关错误（页面级失败，不会中断整个批次）
#[derive(Debug, Error)]
pub enum BrowserError {
    /// 启动浏览器失败
    #[error("启动浏览器失败: {source}")]
    Launch {
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    /// 浏览器配置失败
    #[error("浏览器配置失败: {message}")]
    Configuration { message: String },
    /// 创建页面失败
    #[error("创建页面失败: {source}")]
    PageCreation {
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    /// 导航失败
    #[error("导航到 {url} 失败: {source}")]
    Navigation {
        url: String,
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    /// 等待元素超时
    #[error("等待 '{selector}' 超时 ({timeout:?})")]
    WaitTimeout { selector: String, timeout: Duration },
    /// 读取页面内容失败
    #[error("读取页面内容失败: {source}")]
    Markup {
        #[source]
        source: chromiumoxide::error::CdpError,
    },
}

/// 提取错误
#[derive(Debug, Error)]
pub enum ExtractError {
    /// CSS 选择器无效
    #[error("无效的选择器 '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
    /// 基础 URL 无效
    #[error("无效的基础URL '{base}': {source}")]
    InvalidBaseUrl {
        base: String,
        #[source]
        source: url::ParseError,
    },
    /// 图片地址无法解析为绝对地址
    #[error("无法解析图片地址 '{src}': {source}")]
    UrlResolve {
        src: String,
        #[source]
        source: url::ParseError,
    },
}

/// 输出文件错误
#[derive(Debug, Error)]
pub enum OutputError {
    /// 创建文件失败
    #[error("创建文件失败 ({path}): {source}")]
    Create {
        path: String,
        #[source]
        source: csv::Error,
    },
    /// 序列化记录失败
    #[error("写入记录失败: {source}")]
    Serialize {
        #[source]
        source: csv::Error,
    },
    /// 刷新文件失败
    #[error("刷新文件失败 ({path}): {source}")]
    Flush {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 解析配置文件失败
    #[error("TOML解析失败 ({path}): {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
