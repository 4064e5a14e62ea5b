use std::time::Duration;

use movie_scraper::config::Config;
use movie_scraper::logger;
use movie_scraper::services::{ChromeRenderer, MovieExtractor, PageRenderer};
use movie_scraper::BrowserSession;

const FIXTURE: &str = include_str!("fixtures/ssr1_page.html");

#[test]
fn extracts_rendered_listing_page() {
    logger::init();

    let config = Config::default();
    let extractor = MovieExtractor::new(&config.base_url).expect("构建提取器失败");

    let movies = extractor.extract(FIXTURE);

    // 第三个条目没有海报，不应输出
    assert_eq!(movies.len(), 2);

    assert_eq!(movies[0].name, "霸王别姬 - Farewell My Concubine");
    assert_eq!(movies[0].rating, "9.5");
    assert_eq!(movies[0].genre, "剧情 爱情");
    assert!(movies[0].image_url.starts_with("https://p0.meituan.net/movie/"));

    assert_eq!(movies[1].name, "这个杀手不太冷 - Léon");
    assert_eq!(movies[1].genre, "剧情 动作 犯罪");
    assert_eq!(
        movies[1].image_url,
        "https://ssr1.scrape.center/static/img/poster-2.jpg"
    );
}

#[tokio::test]
#[ignore] // 需要本地 Chrome 和网络：cargo test -- --ignored
async fn test_render_first_page() {
    logger::init();

    let config = Config::from_env();
    let renderer = ChromeRenderer::new(config.clone());

    let markup = renderer.render(1).await.expect("渲染第 1 页失败");
    let movies = MovieExtractor::new(&config.base_url)
        .expect("构建提取器失败")
        .extract(&markup);

    assert!(!movies.is_empty(), "第 1 页应该有电影条目");
}

#[tokio::test]
#[ignore]
async fn test_wait_for_missing_selector_times_out() {
    logger::init();

    let config = Config::from_env();
    let session = BrowserSession::launch(&config).await.expect("启动浏览器失败");

    session.navigate("about:blank").await.expect("导航失败");
    let result = session
        .wait_for("div.never-there", Duration::from_secs(1))
        .await;
    session.close().await;

    assert!(result.is_err(), "不存在的元素应该超时");
}
