use async_trait::async_trait;
use ns_core::text::char_prefix;
use ns_core::{ArticleFetcher, Error, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::debug;

/// Fetched bodies are capped at this many characters; enough for a good
/// summary without dragging whole long reads through the prompts.
pub const MAX_CONTENT_CHARS: usize = 3000;

/// Pulls an article page and reduces it to its paragraph text. Callers
/// substitute the content sentinel on any error.
pub struct HttpArticleFetcher {
    http: Client,
}

impl HttpArticleFetcher {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent("ns/0.1.0")
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl ArticleFetcher for HttpArticleFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Fetch(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        let body = response.text().await?;
        let content = paragraph_text(&body)?;
        if content.is_empty() {
            return Err(Error::Fetch(format!("no paragraph content at {url}")));
        }

        debug!(url, chars = content.chars().count(), "article body fetched");
        Ok(char_prefix(&content, MAX_CONTENT_CHARS).to_string())
    }
}

/// All `<p>` element text joined with single spaces.
fn paragraph_text(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let paragraphs = Selector::parse("p")
        .map_err(|e| Error::Fetch(format!("invalid selector: {e}")))?;

    Ok(document
        .select(&paragraphs)
        .map(|el| el.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paragraphs_with_spaces() {
        let html = "<html><body>\
                    <h1>Headline</h1>\
                    <p>First paragraph.</p>\
                    <div><p>Second <b>bold</b> paragraph.</p></div>\
                    </body></html>";
        assert_eq!(
            paragraph_text(html).unwrap(),
            "First paragraph. Second bold paragraph."
        );
    }

    #[test]
    fn page_without_paragraphs_is_empty() {
        let html = "<html><body><h1>Only a headline</h1></body></html>";
        assert_eq!(paragraph_text(html).unwrap(), "");
    }

    #[test]
    fn content_is_capped_at_limit() {
        let long = format!("<p>{}</p>", "a".repeat(5000));
        let content = paragraph_text(&long).unwrap();
        assert_eq!(char_prefix(&content, MAX_CONTENT_CHARS).chars().count(), 3000);
    }
}
