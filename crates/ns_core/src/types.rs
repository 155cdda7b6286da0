use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Sentinel stored in place of article content when a fetch fails.
pub const CONTENT_UNAVAILABLE: &str = "Content unavailable";

/// Declaration order doubles as the map-key order of serialized
/// sentiment distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    pub fn lowercase(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A search hit before the article body has been fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawArticle {
    pub title: String,
    pub url: String,
    pub source: String,
}

/// One article after enrichment. Immutable once built; the wire names
/// match the JSON consumed by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedArticle {
    #[serde(rename = "Title")]
    pub title: String,
    pub url: String,
    pub content: String,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Sentiment")]
    pub sentiment: Sentiment,
    #[serde(rename = "Topics")]
    pub topics: Vec<String>,
    pub source: String,
}

/// Result of comparing one unordered pair of articles.
/// `articles` holds the 1-based indices as "i and j".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    #[serde(rename = "Comparison")]
    pub comparison: String,
    #[serde(rename = "Impact")]
    pub impact: String,
    #[serde(rename = "Articles")]
    pub articles: String,
}

/// Sentiment value to occurrence count; only counts > 0 are present.
pub type SentimentDistribution = BTreeMap<Sentiment, usize>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicOverlap {
    /// Topics appearing in more than one article, in first-seen order.
    #[serde(rename = "Common Topics")]
    pub common_topics: Vec<String>,
    /// 1-based article index to topics with a global occurrence count of
    /// exactly one; indices with nothing unique are absent.
    #[serde(rename = "Unique Topics By Article")]
    pub unique_topics_by_article: BTreeMap<usize, Vec<String>>,
}

/// The unified comparative-analysis record. When fewer than two articles
/// were supplied only `error` is populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparativeAnalysis {
    #[serde(
        rename = "Sentiment Distribution",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sentiment_distribution: Option<SentimentDistribution>,
    #[serde(
        rename = "Coverage Differences",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub coverage_differences: Option<Vec<ComparisonRecord>>,
    #[serde(rename = "Topic Overlap", default, skip_serializing_if = "Option::is_none")]
    pub topic_overlap: Option<TopicOverlap>,
    #[serde(
        rename = "Final Sentiment Analysis",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub final_sentiment_analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ComparativeAnalysis {
    pub fn not_enough_articles() -> Self {
        Self {
            error: Some("Not enough articles for comparative analysis".to_string()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sentiment_distribution.is_none()
            && self.coverage_differences.is_none()
            && self.topic_overlap.is_none()
            && self.final_sentiment_analysis.is_none()
            && self.error.is_none()
    }
}

/// Full per-company report: enriched articles plus the comparative score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyReport {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Articles")]
    pub articles: Vec<ProcessedArticle>,
    #[serde(rename = "Comparative Sentiment Score")]
    pub comparative: ComparativeAnalysis,
}
