use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The closed set of headline categories the selector offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    General,
    Entertainment,
    Science,
    Technology,
    Sports,
    Business,
    Health,
}

impl Category {
    /// Menu order.
    pub const ALL: [Category; 7] = [
        Category::General,
        Category::Entertainment,
        Category::Science,
        Category::Technology,
        Category::Sports,
        Category::Business,
        Category::Health,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Entertainment => "Entertainment",
            Category::Science => "Science",
            Category::Technology => "Technology",
            Category::Sports => "Sports",
            Category::Business => "Business",
            Category::Health => "Health",
        }
    }

    /// Lower-cased value sent on the wire.
    pub fn query(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Entertainment => "entertainment",
            Category::Science => "science",
            Category::Technology => "technology",
            Category::Sports => "sports",
            Category::Business => "business",
            Category::Health => "health",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.query() == needle)
            .ok_or_else(|| Error::Config(format!("unknown category: {}", s)))
    }
}

/// What the selector currently points at. Starts as the sentinel and is
/// only ever replaced by an explicit user selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    Unselected,
    Chosen(Category),
}

impl CategorySelection {
    /// Label shown on the selector button.
    pub fn label(self) -> &'static str {
        match self {
            CategorySelection::Unselected => "Select Category",
            CategorySelection::Chosen(category) => category.label(),
        }
    }

    /// Wire value; the sentinel maps to the upstream default feed.
    pub fn query(self) -> &'static str {
        match self {
            CategorySelection::Unselected => "general",
            CategorySelection::Chosen(category) => category.query(),
        }
    }
}
