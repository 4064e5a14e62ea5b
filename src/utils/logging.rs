//! 日志工具模块
//!
//! 进度与统计信息的输出格式集中在这里，只输出不影响流程

use tracing::info;

use crate::config::Config;
use crate::models::Movie;
use crate::workflow::PageCtx;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🎬 电影抓取 - {}", config.base_url);
    info!("📄 页数: {} | 输出: {}", config.page_count, config.output_file);
    info!("{}", "=".repeat(60));
}

/// 记录页面开始信息
pub fn log_page_start(ctx: &PageCtx, url: &str) {
    info!("{} 正在抓取: {}", ctx, url);
}

/// 记录页面完成信息
pub fn log_page_complete(ctx: &PageCtx, found: usize, total: usize) {
    info!("{} ✓ 本页 {} 条，累计 {} 条", ctx, found, total);
}

/// 打印最终统计信息
///
/// # 参数
/// - `pages_ok`: 渲染成功的页数
/// - `pages_failed`: 渲染失败的页数
/// - `total_movies`: 记录总数
pub fn print_final_stats(pages_ok: usize, pages_failed: usize, total_movies: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 抓取完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功页数: {}", pages_ok);
    info!("❌ 失败页数: {}", pages_failed);
    info!("🎞 电影总数: {}", total_movies);
    info!("{}", "=".repeat(60));
}

/// 展示前 `count` 条记录
pub fn print_sample(movies: &[Movie], count: usize) {
    if movies.is_empty() || count == 0 {
        return;
    }

    info!("\n样例数据（前 {} 条）:", count.min(movies.len()));
    info!("{}", "-".repeat(60));
    for (i, movie) in movies.iter().take(count).enumerate() {
        info!("{}. {}", i + 1, movie.name);
        info!("   评分: {}", movie.rating);
        info!("   类型: {}", movie.genre);
        info!("   图片: {}", truncate_text(&movie.image_url, 80));
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
