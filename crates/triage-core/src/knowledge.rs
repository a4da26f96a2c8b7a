//! Knowledge base article type.

use serde::{Deserialize, Serialize};

/// A help article returned by knowledge base searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeArticle {
    /// Article id, e.g. `KB-001`.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Grouping label.
    pub category: String,
}

impl KnowledgeArticle {
    /// Build an article from borrowed parts.
    pub fn new(id: &str, title: &str, content: &str, category: &str) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            content: content.to_owned(),
            category: category.to_owned(),
        }
    }
}
