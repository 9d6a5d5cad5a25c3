use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use nd_core::{
    ApiConfig, Article, ArticleSource, CategorySelection, Error, Result, PLACEHOLDER_IMAGE,
};

use crate::provider::HeadlinesProvider;

/// Client for the GNews `top-headlines` listing endpoint. Stateless across
/// calls; each invocation issues exactly one GET.
pub struct GNewsClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl GNewsClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl HeadlinesProvider for GNewsClient {
    fn source_name(&self) -> &str {
        "GNews"
    }

    async fn top_headlines(&self, selection: CategorySelection) -> Result<Vec<Article>> {
        let url = format!("{}/top-headlines", self.config.base_url);
        debug!("requesting {} headlines from {}", selection.query(), url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("category", selection.query()),
                ("apikey", self.config.api_key.as_str()),
                ("country", self.config.country.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!(
                "headlines request failed with status {}",
                status
            )));
        }

        let body: HeadlinesResponse = response.json().await?;
        Ok(normalize(body.articles))
    }
}

#[derive(Debug, Deserialize)]
struct HeadlinesResponse {
    articles: Vec<RawArticle>,
}

/// Upstream item with every field optional. Normalization applies the
/// display defaults so raw nulls never reach the view.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawArticle {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    url: Option<String>,
    image: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    source: Option<RawSource>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSource {
    name: Option<String>,
    url: Option<String>,
}

fn normalize(raw: Vec<RawArticle>) -> Vec<Article> {
    raw.into_iter()
        .enumerate()
        .map(|(id, item)| {
            let fallback = ArticleSource::unknown();
            let source = item.source.unwrap_or_default();
            Article {
                id,
                title: item.title.unwrap_or_default(),
                description: item.description.unwrap_or_default(),
                content: item.content.unwrap_or_default(),
                url: item.url.unwrap_or_default(),
                image: non_empty(item.image).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
                published_at: item.published_at.unwrap_or_default(),
                source: ArticleSource {
                    name: non_empty(source.name).unwrap_or(fallback.name),
                    url: non_empty(source.url).unwrap_or(fallback.url),
                },
            }
        })
        .collect()
}

// Upstream sends both nulls and empty strings for absent fields.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
