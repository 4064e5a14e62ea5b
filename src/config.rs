use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// 程序配置
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 目标站点根地址
    pub base_url: String,
    /// 抓取的页数（从第 1 页开始）
    pub page_count: u32,
    /// 输出 CSV 文件
    pub output_file: String,
    /// 等待列表元素出现的最长秒数
    pub wait_timeout_secs: u64,
    /// 两页之间的固定间隔（毫秒）
    pub page_delay_ms: u64,
    /// 是否使用无头模式
    pub headless: bool,
    /// 浏览器可执行文件路径，留空则自动查找
    pub chrome_executable: Option<String>,
    /// 结束时展示的样例条数
    pub sample_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://ssr1.scrape.center".to_string(),
            page_count: 10,
            output_file: "movie.csv".to_string(),
            wait_timeout_secs: 10,
            page_delay_ms: 1000,
            headless: true,
            chrome_executable: None,
            sample_size: 3,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载配置，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 加载配置：TOML 文件（存在时） + 环境变量覆盖
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let base = if path.exists() {
            Self::from_toml_file(path)?
        } else {
            Self::default()
        };
        Ok(base.with_env_overrides())
    }

    fn with_env_overrides(self) -> Self {
        Self {
            base_url: std::env::var("BASE_URL").unwrap_or(self.base_url),
            page_count: env_parse("PAGE_COUNT").unwrap_or(self.page_count),
            output_file: std::env::var("OUTPUT_FILE").unwrap_or(self.output_file),
            wait_timeout_secs: env_parse("WAIT_TIMEOUT_SECS").unwrap_or(self.wait_timeout_secs),
            page_delay_ms: env_parse("PAGE_DELAY_MS").unwrap_or(self.page_delay_ms),
            headless: env_parse("HEADLESS").unwrap_or(self.headless),
            chrome_executable: std::env::var("CHROME_EXECUTABLE").ok().or(self.chrome_executable),
            sample_size: env_parse("SAMPLE_SIZE").unwrap_or(self.sample_size),
        }
    }

    /// 第 `index` 页的地址：`{base_url}/page/{index}`
    pub fn page_url(&self, index: u32) -> String {
        format!("{}/page/{}", self.base_url.trim_end_matches('/'), index)
    }

    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }

    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_follows_template() {
        let config = Config::default();
        assert_eq!(config.page_url(3), "https://ssr1.scrape.center/page/3");

        let config = Config {
            base_url: "https://ssr1.scrape.center/".to_string(),
            ..Config::default()
        };
        assert_eq!(config.page_url(1), "https://ssr1.scrape.center/page/1");
    }

    #[test]
    fn toml_keeps_defaults_for_missing_keys() {
        let config = Config::from_toml_str("page_count = 2\nheadless = false\n").unwrap();
        assert_eq!(config.page_count, 2);
        assert!(!config.headless);
        assert_eq!(config.output_file, "movie.csv");
        assert_eq!(config.wait_timeout(), Duration::from_secs(10));
        assert_eq!(config.page_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn toml_rejects_wrong_types() {
        assert!(Config::from_toml_str("page_count = \"ten\"").is_err());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Config::from_toml_file(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
