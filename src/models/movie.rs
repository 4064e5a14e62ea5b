use serde::Serialize;

/// 字段无法提取时使用的占位值
pub const NOT_AVAILABLE: &str = "N/A";

/// 一条电影记录
///
/// 字段顺序即 CSV 列顺序：`name,image_url,rating,genre`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    /// 片名
    pub name: String,
    /// 海报的绝对地址
    pub image_url: String,
    /// 评分（保持页面上的原文）
    pub rating: String,
    /// 以空格连接的类型标签
    pub genre: String,
}

impl Movie {
    pub fn new(
        name: impl Into<String>,
        image_url: impl Into<String>,
        rating: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
            rating: rating.into(),
            genre: genre.into(),
        }
    }
}
