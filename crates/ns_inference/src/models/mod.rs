use std::sync::Arc;

use ns_core::{Error, Result, TextGenerator};

pub mod dummy;
pub mod gemini;

pub use dummy::DummyModel;
pub use gemini::GeminiModel;

/// Builds a shared generator by name. `gemini` talks to the hosted API;
/// `dummy` is deterministic and offline.
pub async fn create_model(name: &str, api_key: Option<String>) -> Result<Arc<dyn TextGenerator>> {
    match name {
        "gemini" => Ok(Arc::new(GeminiModel::new(api_key)?)),
        "dummy" => Ok(Arc::new(DummyModel::new().await?)),
        other => Err(Error::Generation(format!(
            "unknown model: {other} (available: gemini, dummy)"
        ))),
    }
}
