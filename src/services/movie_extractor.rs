//! 电影记录提取服务 - 业务能力层
//!
//! 把一页渲染后的 HTML 映射为 `Vec<Movie>`。
//!
//! 每个字段是一组按优先级排列的提取尝试（`ElementRef -> Option<String>`），
//! 由 [`first_non_empty`] 取第一个非空结果，全部落空时得到 `"N/A"`。
//! 只有能解析出图片地址的条目才会输出。

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::ExtractError;
use crate::models::{Movie, NOT_AVAILABLE};

/// 列表条目容器
pub const ITEM_SELECTOR: &str = "div.item";
const IMAGE_SELECTOR: &str = "img";
const NAME_LINK_SELECTOR: &str = "a.name";
const ANY_LINK_SELECTOR: &str = "a";
const SCORE_SELECTOR: &str = "p.score";
const CATEGORY_SELECTOR: &str = "button.category";

type Attempt<'s> = &'s dyn Fn(ElementRef<'_>) -> Option<String>;

/// 电影记录提取器
///
/// 选择器在构造时编译一次，之后可对任意多页复用
pub struct MovieExtractor {
    base_url: Url,
    item: Selector,
    image: Selector,
    name_link: Selector,
    any_link: Selector,
    score: Selector,
    category: Selector,
}

impl MovieExtractor {
    /// 创建提取器，相对图片地址将基于 `base_url` 解析
    pub fn new(base_url: &str) -> Result<Self, ExtractError> {
        let base_url = Url::parse(base_url).map_err(|source| ExtractError::InvalidBaseUrl {
            base: base_url.to_string(),
            source,
        })?;

        Ok(Self {
            base_url,
            item: selector(ITEM_SELECTOR)?,
            image: selector(IMAGE_SELECTOR)?,
            name_link: selector(NAME_LINK_SELECTOR)?,
            any_link: selector(ANY_LINK_SELECTOR)?,
            score: selector(SCORE_SELECTOR)?,
            category: selector(CATEGORY_SELECTOR)?,
        })
    }

    /// 从一页 HTML 中提取所有电影记录，保持文档顺序
    ///
    /// 单个条目出错只会跳过该条目
    pub fn extract(&self, markup: &str) -> Vec<Movie> {
        let document = Html::parse_document(markup);
        let mut movies = Vec::new();

        for (index, item) in document.select(&self.item).enumerate() {
            match self.extract_item(item) {
                Ok(Some(movie)) => {
                    info!("  ✓ 找到: {} (评分: {})", movie.name, movie.rating);
                    movies.push(movie);
                }
                Ok(None) => debug!("  第 {} 个条目没有图片，跳过", index + 1),
                Err(e) => warn!("  ⚠ 解析第 {} 个条目出错: {}", index + 1, e),
            }
        }

        movies
    }

    /// 提取单个条目；没有图片时返回 `Ok(None)`
    fn extract_item(&self, item: ElementRef<'_>) -> Result<Option<Movie>, ExtractError> {
        let Some(src) = self.image_src(item) else {
            return Ok(None);
        };
        let image_url = resolve_url(&self.base_url, &src)?;

        let name = first_non_empty(
            item,
            &[
                &|i: ElementRef<'_>| self.link_title(i),
                &|i: ElementRef<'_>| self.link_text(i),
            ],
        );
        let rating = first_non_empty(item, &[&|i: ElementRef<'_>| self.score_text(i)]);
        let genre = first_non_empty(item, &[&|i: ElementRef<'_>| self.categories(i)]);

        Ok(Some(Movie {
            name,
            image_url,
            rating,
            genre,
        }))
    }

    fn image_src(&self, item: ElementRef<'_>) -> Option<String> {
        item.select(&self.image)
            .next()
            .and_then(|img| img.value().attr("src"))
            .and_then(non_empty)
    }

    /// 优先 `a.name`，否则条目中的第一个链接
    fn name_link<'a>(&self, item: ElementRef<'a>) -> Option<ElementRef<'a>> {
        item.select(&self.name_link)
            .next()
            .or_else(|| item.select(&self.any_link).next())
    }

    fn link_title(&self, item: ElementRef<'_>) -> Option<String> {
        self.name_link(item)
            .and_then(|link| link.value().attr("title"))
            .and_then(non_empty)
    }

    fn link_text(&self, item: ElementRef<'_>) -> Option<String> {
        self.name_link(item)
            .map(stripped_text)
            .and_then(|text| non_empty(&text))
    }

    fn score_text(&self, item: ElementRef<'_>) -> Option<String> {
        item.select(&self.score)
            .next()
            .map(stripped_text)
            .and_then(|text| non_empty(&text))
    }

    /// 所有类型标签，按文档顺序以单个空格连接
    fn categories(&self, item: ElementRef<'_>) -> Option<String> {
        let labels: Vec<String> = item
            .select(&self.category)
            .map(stripped_text)
            .filter(|label| !label.is_empty())
            .collect();
        non_empty(&labels.join(" "))
    }
}

/// 依次尝试，返回第一个非空结果，全部落空则为 `"N/A"`
fn first_non_empty(item: ElementRef<'_>, attempts: &[Attempt<'_>]) -> String {
    attempts
        .iter()
        .find_map(|attempt| attempt(item).filter(|value| !value.is_empty()))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// 相对地址基于 `base` 解析为绝对地址；以 `http` 开头的地址原样保留
pub fn resolve_url(base: &Url, src: &str) -> Result<String, ExtractError> {
    if src.starts_with("http") {
        return Ok(src.to_string());
    }
    base.join(src)
        .map(String::from)
        .map_err(|source| ExtractError::UrlResolve {
            src: src.to_string(),
            source,
        })
}

/// 每个文本节点去掉首尾空白后直接拼接
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::InvalidSelector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}
