use serde::{Deserialize, Serialize};

/// Image reference shown when an upstream item carries no usable image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=600";

/// A headline normalized for display. `id` is the position within the
/// current result set and is not stable across requests. `published_at`
/// is passed through exactly as the source API supplied it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: usize,
    pub title: String,
    pub description: String,
    pub content: String,
    pub url: String,
    pub image: String,
    pub published_at: String,
    pub source: ArticleSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSource {
    pub name: String,
    pub url: String,
}

impl ArticleSource {
    /// Fallback values applied when the upstream item has no source.
    pub fn unknown() -> Self {
        Self {
            name: "Unknown".to_string(),
            url: "#".to_string(),
        }
    }
}
