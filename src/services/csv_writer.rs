//! CSV 写入服务 - 业务能力层
//!
//! 只负责把一批记录写成 `name,image_url,rating,genre` 表格

use tracing::debug;

use crate::error::OutputError;
use crate::models::Movie;

/// 写入结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// 没有记录，未创建文件
    Skipped,
    /// 已写入 `rows` 行数据（不含表头）
    Written { path: String, rows: usize },
}

/// CSV 写入服务
pub struct CsvWriter {
    path: String,
}

impl CsvWriter {
    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// 写入全部记录，覆盖已有文件；记录为空时不创建文件
    pub fn write(&self, movies: &[Movie]) -> Result<WriteOutcome, OutputError> {
        if movies.is_empty() {
            debug!("没有记录，跳过写入 {}", self.path);
            return Ok(WriteOutcome::Skipped);
        }

        let mut writer = csv::Writer::from_path(&self.path).map_err(|source| OutputError::Create {
            path: self.path.clone(),
            source,
        })?;

        for movie in movies {
            writer
                .serialize(movie)
                .map_err(|source| OutputError::Serialize { source })?;
        }

        writer.flush().map_err(|source| OutputError::Flush {
            path: self.path.clone(),
            source,
        })?;

        debug!("已写入 {} 条记录到 {}", movies.len(), self.path);
        Ok(WriteOutcome::Written {
            path: self.path.clone(),
            rows: movies.len(),
        })
    }
}
