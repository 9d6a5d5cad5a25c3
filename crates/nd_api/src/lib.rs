pub mod gnews;
pub mod provider;

pub use gnews::GNewsClient;
pub use provider::HeadlinesProvider;

pub mod prelude {
    pub use super::provider::HeadlinesProvider;
    pub use nd_core::{Article, Error, Result};
}
