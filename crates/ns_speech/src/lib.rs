use std::path::PathBuf;
use std::sync::Arc;

use ns_core::{ComparativeAnalysis, Result, SpeechSynthesizer, Translator};
use tracing::{info, warn};
use uuid::Uuid;

pub mod translate;
pub mod tts;

pub use translate::GoogleTranslator;
pub use tts::GoogleSpeech;

/// The final verdict is spoken in Hindi.
pub const VERDICT_LANGUAGE: &str = "hi";

const MISSING_ANALYSIS_TEXT: &str = "No comparative analysis available";

/// Renders the final sentiment verdict as spoken audio: translate (best
/// effort), then synthesize. Only the synthesis step can fail; a failed
/// translation falls back to the untranslated text.
pub struct SpeechService {
    translator: Arc<dyn Translator>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl SpeechService {
    pub fn new(translator: Arc<dyn Translator>, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self {
            translator,
            synthesizer,
        }
    }

    /// Audio bytes for the `Final Sentiment Analysis` field alone.
    pub async fn verdict_audio(&self, analysis: &ComparativeAnalysis) -> Result<Vec<u8>> {
        let text = analysis
            .final_sentiment_analysis
            .as_deref()
            .unwrap_or(MISSING_ANALYSIS_TEXT);
        info!(%text, "🔊 generating speech for final verdict");

        let spoken = match self.translator.translate(text, VERDICT_LANGUAGE).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!(error = %e, "translation failed, using original text");
                text.to_string()
            }
        };

        self.synthesizer.synthesize(&spoken, VERDICT_LANGUAGE).await
    }

    /// Writes the verdict audio to `path`, or to a fresh file in the
    /// temp dir when no path is given. Returns the file written.
    pub async fn speak_final_verdict(
        &self,
        analysis: &ComparativeAnalysis,
        path: Option<PathBuf>,
    ) -> Result<PathBuf> {
        let audio = self.verdict_audio(analysis).await?;

        let path = path.unwrap_or_else(|| {
            std::env::temp_dir().join(format!("comparative_speech_{}.mp3", Uuid::new_v4()))
        });
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &audio).await?;

        info!(path = %path.display(), "audio file generated");
        Ok(path)
    }
}
