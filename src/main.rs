use anyhow::Result;
use movie_scraper::{logger, App, Config};

/// 配置文件（可选），不存在时使用默认值 + 环境变量
const CONFIG_FILE: &str = "scraper.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::load(CONFIG_FILE)?;

    // 运行
    App::new(config).run().await?;

    Ok(())
}
