use std::sync::Arc;

use ns_core::text::char_prefix;
use ns_core::{Result, TextGenerator, CONTENT_UNAVAILABLE};
use tracing::warn;

pub const SUMMARY_UNAVAILABLE: &str = "Summary unavailable";

const PROMPT_WINDOW: usize = 2000;
const MAX_SUMMARY_CHARS: usize = 300;
const FALLBACK_WINDOW: usize = 200;
const MIN_CONTENT_CHARS: usize = 100;

/// Short natural-language article summaries via the text generator, with
/// a deterministic truncation fallback when the generator fails.
pub struct ArticleSummarizer {
    generator: Arc<dyn TextGenerator>,
}

impl ArticleSummarizer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn summarize(&self, content: &str, company: &str) -> String {
        if content == CONTENT_UNAVAILABLE || content.chars().count() < MIN_CONTENT_CHARS {
            return SUMMARY_UNAVAILABLE.to_string();
        }

        match self.generated_summary(content, company).await {
            Ok(summary) => cap_summary(&summary),
            Err(e) => {
                warn!(error = %e, "summary generation failed, falling back to truncation");
                truncation_fallback(content)
            }
        }
    }

    async fn generated_summary(&self, content: &str, company: &str) -> Result<String> {
        let prompt = format!(
            "Summarize the following news article about {} in 2-3 concise sentences:\n\n{}",
            company,
            char_prefix(content, PROMPT_WINDOW),
        );
        let reply = self.generator.generate(&prompt).await?;
        Ok(reply.trim().to_string())
    }
}

fn cap_summary(summary: &str) -> String {
    if summary.chars().count() > MAX_SUMMARY_CHARS {
        format!("{}...", char_prefix(summary, MAX_SUMMARY_CHARS - 3))
    } else {
        summary.to_string()
    }
}

fn truncation_fallback(content: &str) -> String {
    if content.chars().count() > FALLBACK_WINDOW {
        format!("{}...", char_prefix(content, FALLBACK_WINDOW))
    } else {
        content.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedGenerator;
    use std::sync::Arc;

    fn long_content() -> String {
        "word ".repeat(100)
    }

    #[tokio::test]
    async fn unavailable_content_short_circuits() {
        let summarizer = Arc::new(ScriptedGenerator::replying("should not be used"));
        let summarizer = ArticleSummarizer::new(summarizer);
        assert_eq!(
            summarizer.summarize(CONTENT_UNAVAILABLE, "Acme").await,
            SUMMARY_UNAVAILABLE
        );
        assert_eq!(summarizer.summarize("too short", "Acme").await, SUMMARY_UNAVAILABLE);
    }

    #[tokio::test]
    async fn uses_generated_summary() {
        let summarizer =
            ArticleSummarizer::new(Arc::new(ScriptedGenerator::replying("A tidy summary.")));
        assert_eq!(
            summarizer.summarize(&long_content(), "Acme").await,
            "A tidy summary."
        );
    }

    #[tokio::test]
    async fn long_generated_summary_is_capped() {
        let reply = "x".repeat(400);
        let summarizer = ArticleSummarizer::new(Arc::new(ScriptedGenerator::replying(&reply)));
        let summary = summarizer.summarize(&long_content(), "Acme").await;
        assert_eq!(summary.chars().count(), 300);
        assert!(summary.ends_with("..."));
    }

    #[tokio::test]
    async fn generator_failure_truncates_content() {
        let content = long_content();
        let summarizer = ArticleSummarizer::new(Arc::new(ScriptedGenerator::failing()));
        let summary = summarizer.summarize(&content, "Acme").await;
        assert_eq!(summary, format!("{}...", &content[..200]));
    }
}
