use async_trait::async_trait;
use ns_core::{Error, Result, Translator};
use reqwest::Client;
use serde_json::Value;

const TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Translation via the public web endpoint. The reply is a nested JSON
/// array whose first element holds the translated segments.
pub struct GoogleTranslator {
    http: Client,
}

impl GoogleTranslator {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent("ns/0.1.0")
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String> {
        let url = format!(
            "{}?client=gtx&sl=auto&tl={}&dt=t&q={}",
            TRANSLATE_ENDPOINT,
            target_lang,
            urlencoding::encode(text),
        );

        let value: Value = self.http.get(&url).send().await?.json().await?;
        let translated = collect_segments(&value);
        if translated.is_empty() {
            return Err(Error::Translation(
                "unexpected translation response shape".to_string(),
            ));
        }
        Ok(translated)
    }
}

fn collect_segments(value: &Value) -> String {
    let mut out = String::new();
    if let Some(segments) = value.get(0).and_then(Value::as_array) {
        for segment in segments {
            if let Some(text) = segment.get(0).and_then(Value::as_str) {
                out.push_str(text);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_translated_segments_in_order() {
        let reply: Value = serde_json::from_str(
            r#"[[["Erste Hälfte. ","First half. ",null],["Zweite Hälfte.","Second half.",null]],null,"en"]"#,
        )
        .unwrap();
        assert_eq!(collect_segments(&reply), "Erste Hälfte. Zweite Hälfte.");
    }

    #[test]
    fn malformed_reply_collects_nothing() {
        assert_eq!(collect_segments(&Value::Null), "");
        assert_eq!(collect_segments(&serde_json::json!({"error": 1})), "");
    }
}
