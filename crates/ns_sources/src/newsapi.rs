use async_trait::async_trait;
use ns_core::{Error, NewsSource, RawArticle, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const NEWSAPI_ENDPOINT: &str = "https://newsapi.org/v2/everything";

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Deserialize)]
struct NewsApiArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    source: Option<ApiSource>,
}

#[derive(Debug, Deserialize)]
struct ApiSource {
    #[serde(default)]
    name: Option<String>,
}

/// Company news search against newsapi.org. Auth via `apiKey` query
/// param; English articles only, like the consumer expects.
pub struct NewsApiSource {
    http: Client,
    api_key: String,
}

impl NewsApiSource {
    pub fn new(api_key: String) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent("ns/0.1.0")
            .build()?;
        Ok(Self { http, api_key })
    }
}

#[async_trait]
impl NewsSource for NewsApiSource {
    async fn search(&self, company: &str) -> Result<Vec<RawArticle>> {
        let url = format!(
            "{}?q={}&language=en&apiKey={}",
            NEWSAPI_ENDPOINT,
            urlencoding::encode(company),
            self.api_key,
        );

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::News(format!(
                "NewsAPI returned {}",
                response.status()
            )));
        }

        let data: NewsApiResponse = response.json().await?;
        debug!(count = data.articles.len(), "NewsAPI search returned articles");

        Ok(data
            .articles
            .into_iter()
            .filter_map(|article| {
                Some(RawArticle {
                    title: article.title?,
                    url: article.url?,
                    source: article
                        .source
                        .and_then(|s| s.name)
                        .unwrap_or_else(|| "Unknown Source".to_string()),
                })
            })
            .collect())
    }
}
