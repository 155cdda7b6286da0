use std::sync::Arc;

use ns_core::text::char_prefix;
use ns_core::{Result, TextGenerator};
use tracing::warn;

/// Label returned when nothing in the vocabulary matches.
pub const DEFAULT_TOPIC: &str = "Company News";

const MAX_TOPICS: usize = 3;
const KEYWORD_WINDOW: usize = 500;

/// Closed vocabulary of business-news topics. Order matters: the keyword
/// fallback emits labels in table order.
const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("Electric Vehicles", &["ev", "electric vehicle", "battery", "charging"]),
    ("Stock Market", &["stock", "shares", "market", "investor", "nasdaq", "wall street"]),
    ("Innovation", &["innovation", "tech", "technology", "breakthrough", "cutting-edge"]),
    ("Regulations", &["regulator", "compliance", "law", "legal", "government", "policy"]),
    ("Autonomous Vehicles", &["autonomous", "self-driving", "autopilot", "driver assist"]),
    ("Financial Results", &["earnings", "revenue", "profit", "quarterly", "financial"]),
    ("Product Launch", &["launch", "new", "introduce", "unveil", "announce"]),
    ("Leadership", &["ceo", "executive", "management", "appoint", "hire", "board"]),
    ("Partnerships", &["partner", "collaboration", "joint venture", "alliance", "deal"]),
    ("Competition", &["competitor", "rival", "versus", "market share", "industry"]),
    ("Sustainability", &["sustainable", "green", "environment", "carbon", "emission"]),
    ("Manufacturing", &["factory", "production", "manufacturing", "supply chain", "assembly"]),
    ("Global Markets", &["global", "international", "overseas", "export", "foreign"]),
];

/// Extracts up to three topic labels per article: model-backed when the
/// generator cooperates, keyword matching otherwise.
pub struct TopicExtractor {
    generator: Arc<dyn TextGenerator>,
}

impl TopicExtractor {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn extract(&self, title: &str, content: &str, company: &str) -> Vec<String> {
        match self.generated_topics(title, content, company).await {
            Ok(Some(topics)) => topics,
            Ok(None) => keyword_topics(title, content),
            Err(e) => {
                warn!(error = %e, "topic generation failed, falling back to keywords");
                keyword_topics(title, content)
            }
        }
    }

    async fn generated_topics(
        &self,
        title: &str,
        content: &str,
        company: &str,
    ) -> Result<Option<Vec<String>>> {
        let vocabulary: Vec<&str> = TOPIC_KEYWORDS.iter().map(|(label, _)| *label).collect();
        let prompt = format!(
            "List the 2-3 main topics of this news article about {}.\n\
             Respond with ONLY a JSON array of strings (topic names only).\n\
             Choose from: {}.\n\n\
             Example response: [\"Electric Vehicles\", \"Innovation\", \"Competition\"]\n\n\
             Title: {}\n\
             First part of article: {}",
            company,
            vocabulary.join(", "),
            title,
            char_prefix(content, KEYWORD_WINDOW),
        );

        let reply = self.generator.generate(&prompt).await?;
        Ok(parse_topic_list(&reply))
    }
}

/// Strict parse of the model reply: a literal JSON array of strings,
/// deduplicated and capped at three. Anything else is `None`.
pub fn parse_topic_list(reply: &str) -> Option<Vec<String>> {
    let parsed: Vec<String> = serde_json::from_str(reply.trim()).ok()?;
    let mut topics: Vec<String> = Vec::new();
    for topic in parsed {
        if !topics.contains(&topic) {
            topics.push(topic);
        }
        if topics.len() == MAX_TOPICS {
            break;
        }
    }
    Some(topics)
}

/// Deterministic fallback: a label is included when any of its keywords
/// appears as a substring of the lowercased title + first 500 chars of
/// content.
pub fn keyword_topics(title: &str, content: &str) -> Vec<String> {
    let combined = format!("{} {}", title, char_prefix(content, KEYWORD_WINDOW)).to_lowercase();

    let mut found: Vec<String> = TOPIC_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| combined.contains(kw)))
        .map(|(label, _)| label.to_string())
        .collect();
    found.truncate(MAX_TOPICS);

    if found.is_empty() {
        vec![DEFAULT_TOPIC.to_string()]
    } else {
        found
    }
}
