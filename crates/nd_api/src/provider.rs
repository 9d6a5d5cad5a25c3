use async_trait::async_trait;
use nd_core::{Article, CategorySelection, Result};

/// A source of category-filtered headline listings.
#[async_trait]
pub trait HeadlinesProvider: Send + Sync {
    /// Returns the name of the headlines source
    fn source_name(&self) -> &str;

    /// Fetches the current headlines for the given selection, normalized
    /// in upstream order. An empty listing is a valid success.
    async fn top_headlines(&self, selection: CategorySelection) -> Result<Vec<Article>>;
}
