use std::fmt;

use async_trait::async_trait;
use ns_core::{Result, TextGenerator};

/// Offline generator: echoes the first 20 words of the prompt. Every
/// structured consumer (topic list, comparison fields) fails to parse
/// this, so the pipeline exercises its deterministic fallbacks.
pub struct DummyModel;

impl DummyModel {
    pub async fn new() -> Result<Self> {
        Ok(Self)
    }
}

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

#[async_trait]
impl TextGenerator for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let words: Vec<&str> = prompt.split_whitespace().take(20).collect();
        Ok(words.join(" "))
    }
}
