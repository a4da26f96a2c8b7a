//! Keyword-indexed knowledge base.
//!
//! A query matches a keyword when the keyword occurs anywhere inside the
//! lower-cased query. Every matching keyword contributes its full article
//! list, in registration order; nothing is ranked or deduplicated. A query
//! with no match gets the single fallback article.

use std::sync::LazyLock;

use triage_core::KnowledgeArticle;

/// Keyword and the articles it maps to.
#[derive(Debug, Clone)]
struct Topic {
    keyword: String,
    articles: Vec<KnowledgeArticle>,
}

/// Immutable keyword → article-list index.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    topics: Vec<Topic>,
    fallback: KnowledgeArticle,
}

static BUILTIN: LazyLock<KnowledgeBase> = LazyLock::new(builtin_knowledge_base);

impl KnowledgeBase {
    /// Build an index. Keywords are matched case-insensitively.
    pub fn new(
        topics: impl IntoIterator<Item = (String, Vec<KnowledgeArticle>)>,
        fallback: KnowledgeArticle,
    ) -> Self {
        Self {
            topics: topics
                .into_iter()
                .map(|(keyword, articles)| Topic {
                    keyword: keyword.to_lowercase(),
                    articles,
                })
                .collect(),
            fallback,
        }
    }

    /// The process-wide built-in index, built on first use.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Registered keywords, in registration order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.keyword.as_str())
    }

    /// Article returned when nothing matches.
    pub fn fallback(&self) -> &KnowledgeArticle {
        &self.fallback
    }

    /// Articles for every keyword contained in `query`.
    pub fn search(&self, query: &str) -> Vec<KnowledgeArticle> {
        let query = query.to_lowercase();
        let matches: Vec<KnowledgeArticle> = self
            .topics
            .iter()
            .filter(|topic| query.contains(topic.keyword.as_str()))
            .flat_map(|topic| topic.articles.iter().cloned())
            .collect();

        if matches.is_empty() {
            vec![self.fallback.clone()]
        } else {
            matches
        }
    }
}

fn builtin_knowledge_base() -> KnowledgeBase {
    let topics = vec![
        (
            "payment".to_string(),
            vec![
                KnowledgeArticle::new(
                    "KB-001",
                    "Payment Processing Troubleshooting",
                    "Common issues: Check gateway connectivity, verify API keys, review transaction logs.",
                    "Payments",
                ),
                KnowledgeArticle::new(
                    "KB-002",
                    "Payment Gateway Integration Guide",
                    "Step-by-step guide for integrating payment gateways. Requires API credentials.",
                    "Payments",
                ),
            ],
        ),
        (
            "login".to_string(),
            vec![
                KnowledgeArticle::new(
                    "KB-003",
                    "Login Issues Resolution",
                    "Reset password, clear cache, check session timeout settings (default: 30 min).",
                    "Authentication",
                ),
                KnowledgeArticle::new(
                    "KB-004",
                    "SSO Configuration",
                    "Single Sign-On setup requires SAML 2.0 configuration and certificate management.",
                    "Authentication",
                ),
            ],
        ),
        (
            "performance".to_string(),
            vec![KnowledgeArticle::new(
                "KB-005",
                "Performance Optimization Checklist",
                "1. Check database query performance 2. Review CDN cache settings 3. Monitor API response times.",
                "Performance",
            )],
        ),
        (
            "api".to_string(),
            vec![KnowledgeArticle::new(
                "KB-006",
                "API Rate Limiting",
                "Default rate limit: 1000 requests/hour per API key. Contact support for increases.",
                "API",
            )],
        ),
    ];

    let fallback = KnowledgeArticle::new(
        "KB-GENERAL",
        "General Support Guidelines",
        "For assistance, please provide detailed error messages and steps to reproduce the issue.",
        "General",
    );

    KnowledgeBase::new(topics, fallback)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
