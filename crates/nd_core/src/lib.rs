pub mod category;
pub mod config;
pub mod error;
pub mod types;

pub use category::{Category, CategorySelection};
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use types::{Article, ArticleSource, PLACEHOLDER_IMAGE};
