use std::sync::Arc;

use ns_core::{ComparisonRecord, ProcessedArticle, Result, Sentiment, TextGenerator};
use tracing::warn;

/// Outcome of parsing a generator reply. Either both fields were present
/// and non-empty, or the reply is discarded wholesale; there is no
/// partial fill.
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedComparison {
    Parsed { comparison: String, impact: String },
    Unparseable,
}

/// Produces a Comparison/Impact statement for one unordered article pair.
/// Generator failures never propagate; the deterministic fallback keeps
/// the aggregation alive.
pub struct PairwiseComparator {
    generator: Arc<dyn TextGenerator>,
}

impl PairwiseComparator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// `i` and `j` are the 1-based indices of `a` and `b`, `i < j`.
    pub async fn compare(
        &self,
        i: usize,
        a: &ProcessedArticle,
        j: usize,
        b: &ProcessedArticle,
    ) -> ComparisonRecord {
        let (comparison, impact) = match self.generated_comparison(i, a, j, b).await {
            Ok(ParsedComparison::Parsed { comparison, impact }) => (comparison, impact),
            Ok(ParsedComparison::Unparseable) => {
                warn!(pair = %format!("{i} and {j}"), "unparseable comparison reply, using fallback");
                fallback_comparison(i, a, j, b)
            }
            Err(e) => {
                warn!(pair = %format!("{i} and {j}"), error = %e, "comparison generation failed, using fallback");
                fallback_comparison(i, a, j, b)
            }
        };

        ComparisonRecord {
            comparison,
            impact,
            articles: format!("{} and {}", i, j),
        }
    }

    async fn generated_comparison(
        &self,
        i: usize,
        a: &ProcessedArticle,
        j: usize,
        b: &ProcessedArticle,
    ) -> Result<ParsedComparison> {
        let prompt = format!(
            "Create a detailed comparison between these two news articles about the same company:\n\n\
             ARTICLE {i}:\n\
             Title: {}\n\
             Summary: {}\n\
             Sentiment: {}\n\
             Topics: {}\n\n\
             ARTICLE {j}:\n\
             Title: {}\n\
             Summary: {}\n\
             Sentiment: {}\n\
             Topics: {}\n\n\
             Please provide TWO detailed comparison aspects:\n\n\
             1. A clear comparison of the content focus and angle between these articles\n\
             2. An analysis of the potential market/business impact these different perspectives might have\n\n\
             Format exactly like this example:\n\
             \"Comparison\": \"Article 1 highlights strong sales, while Article 2 discusses regulatory issues.\",\n\
             \"Impact\": \"The first article boosts confidence in market growth, while the second raises concerns about future regulatory hurdles.\"\n\n\
             Do not include labels like \"1.\" or \"Comparison:\" in your response text itself.\n\
             Just provide the comparative text directly.",
            a.title,
            a.summary,
            a.sentiment,
            a.topics.join(", "),
            b.title,
            b.summary,
            b.sentiment,
            b.topics.join(", "),
        );

        let reply = self.generator.generate(&prompt).await?;
        Ok(parse_comparison_reply(&reply))
    }
}

/// Scans the reply line by line for the quoted field markers. A field
/// value is what follows the first colon, stripped of surrounding
/// whitespace, quotes and trailing commas.
pub fn parse_comparison_reply(reply: &str) -> ParsedComparison {
    let mut comparison = None;
    let mut impact = None;

    for line in reply.lines() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix("\"Comparison\":") {
            comparison = clean_field(rest);
        } else if let Some(rest) = trimmed.strip_prefix("\"Impact\":") {
            impact = clean_field(rest);
        }
    }

    match (comparison, impact) {
        (Some(comparison), Some(impact)) => ParsedComparison::Parsed { comparison, impact },
        _ => ParsedComparison::Unparseable,
    }
}

fn clean_field(raw: &str) -> Option<String> {
    let value = raw
        .trim()
        .trim_matches('"')
        .trim_matches(',')
        .trim_matches('"')
        .trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Deterministic substitute built from locally available data only.
pub fn fallback_comparison(
    i: usize,
    a: &ProcessedArticle,
    j: usize,
    b: &ProcessedArticle,
) -> (String, String) {
    let focus_a = a.topics.first().map(String::as_str).unwrap_or("general news");
    let focus_b = b.topics.first().map(String::as_str).unwrap_or("other aspects");

    let comparison = format!(
        "Article {i} focuses on {focus_a}, while Article {j} covers {focus_b}."
    );
    let impact = format!(
        "Article {i} presents a {} view that might {}, while Article {j}'s {} angle could {}.",
        a.sentiment.lowercase(),
        impact_phrase(a.sentiment),
        b.sentiment.lowercase(),
        impact_phrase(b.sentiment),
    );
    (comparison, impact)
}

pub fn impact_phrase(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "boost investor confidence",
        Sentiment::Negative => "raise concerns among stakeholders",
        Sentiment::Neutral => "have a neutral effect on market perception",
    }
}
