use async_trait::async_trait;
use ns_core::{Error, Result, SpeechSynthesizer};
use reqwest::Client;

const TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// MP3 synthesis via the public translate_tts endpoint.
pub struct GoogleSpeech {
    http: Client,
}

impl GoogleSpeech {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent("ns/0.1.0")
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleSpeech {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>> {
        let url = format!(
            "{}?ie=UTF-8&client=tw-ob&tl={}&q={}",
            TTS_ENDPOINT,
            lang,
            urlencoding::encode(text),
        );

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Speech(format!(
                "TTS endpoint returned {}",
                response.status()
            )));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(Error::Speech("TTS endpoint returned no audio".to_string()));
        }
        Ok(bytes.to_vec())
    }
}
