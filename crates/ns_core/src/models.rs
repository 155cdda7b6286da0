use async_trait::async_trait;

use crate::types::RawArticle;
use crate::Result;

/// Free-form text generation. Backs summarization, topic extraction and
/// pairwise comparison; callers absorb failures with their own fallbacks.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Article search for a company query.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn search(&self, company: &str) -> Result<Vec<RawArticle>>;
}

/// Retrieves the readable body of an article.
#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String>;
}

/// Text plus language code to encoded audio bytes.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>>;
}
