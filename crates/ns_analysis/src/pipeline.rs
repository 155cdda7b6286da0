use std::sync::Arc;

use ns_core::{
    ArticleFetcher, CompanyReport, NewsSource, ProcessedArticle, Result, TextGenerator,
    CONTENT_UNAVAILABLE,
};
use tracing::{info, warn};

use crate::aggregate::ComparativeAnalysisAggregator;
use crate::sentiment::SentimentClassifier;
use crate::summary::ArticleSummarizer;
use crate::topics::TopicExtractor;

/// At most this many search hits are enriched per company.
pub const MAX_ARTICLES: usize = 4;

/// End-to-end company analysis: search, fetch, per-article enrichment,
/// comparative aggregation. Collaborators are injected once and shared
/// across sequential runs. The only fatal error is an unreachable news
/// source; everything downstream degrades to fallbacks.
pub struct NewsPipeline {
    source: Arc<dyn NewsSource>,
    fetcher: Arc<dyn ArticleFetcher>,
    summarizer: ArticleSummarizer,
    topics: TopicExtractor,
    classifier: SentimentClassifier,
    aggregator: ComparativeAnalysisAggregator,
}

impl NewsPipeline {
    pub fn new(
        source: Arc<dyn NewsSource>,
        fetcher: Arc<dyn ArticleFetcher>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            source,
            fetcher,
            summarizer: ArticleSummarizer::new(generator.clone()),
            topics: TopicExtractor::new(generator.clone()),
            classifier: SentimentClassifier::new(),
            aggregator: ComparativeAnalysisAggregator::new(generator),
        }
    }

    pub async fn analyze(&self, company: &str) -> Result<CompanyReport> {
        info!(%company, "📰 searching news");
        let hits = self.source.search(company).await?;
        info!(found = hits.len(), consumed = hits.len().min(MAX_ARTICLES), "search complete");

        let mut articles = Vec::new();
        for hit in hits.into_iter().take(MAX_ARTICLES) {
            info!(title = %hit.title, "processing article");

            let content = match self.fetcher.fetch(&hit.url).await {
                Ok(content) => content,
                Err(e) => {
                    warn!(url = %hit.url, error = %e, "fetch failed, storing sentinel content");
                    CONTENT_UNAVAILABLE.to_string()
                }
            };

            let summary = self.summarizer.summarize(&content, company).await;
            let topics = self.topics.extract(&hit.title, &content, company).await;
            let sentiment = self.classifier.classify(&content);

            articles.push(ProcessedArticle {
                title: hit.title,
                url: hit.url,
                content,
                summary,
                sentiment,
                topics,
                source: hit.source,
            });
        }

        let comparative = self.aggregator.aggregate(&articles, company).await;

        Ok(CompanyReport {
            company: company.to_string(),
            articles,
            comparative,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedGenerator;
    use async_trait::async_trait;
    use ns_core::{Error, RawArticle};

    struct FixedSource {
        hits: Vec<RawArticle>,
    }

    #[async_trait]
    impl NewsSource for FixedSource {
        async fn search(&self, _company: &str) -> Result<Vec<RawArticle>> {
            Ok(self.hits.clone())
        }
    }

    struct DownSource;

    #[async_trait]
    impl NewsSource for DownSource {
        async fn search(&self, _company: &str) -> Result<Vec<RawArticle>> {
            Err(Error::News("connection refused".to_string()))
        }
    }

    struct FixedFetcher {
        body: Option<String>,
    }

    #[async_trait]
    impl ArticleFetcher for FixedFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            match &self.body {
                Some(body) => Ok(body.clone()),
                None => Err(Error::Fetch(format!("unreachable: {url}"))),
            }
        }
    }

    fn hit(n: usize) -> RawArticle {
        RawArticle {
            title: format!("Acme stock rallies on strong earnings {n}"),
            url: format!("https://example.com/{n}"),
            source: "Example Wire".to_string(),
        }
    }

    fn pipeline(hits: Vec<RawArticle>, body: Option<String>) -> NewsPipeline {
        NewsPipeline::new(
            Arc::new(FixedSource { hits }),
            Arc::new(FixedFetcher { body }),
            Arc::new(ScriptedGenerator::failing()),
        )
    }

    #[tokio::test]
    async fn consumes_at_most_four_hits() {
        let hits = (0..7).map(hit).collect();
        let body = "Great quarterly profit figures delighted investors. ".repeat(5);
        let report = pipeline(hits, Some(body)).analyze("Acme").await.unwrap();
        assert_eq!(report.company, "Acme");
        assert_eq!(report.articles.len(), MAX_ARTICLES);
        assert_eq!(
            report.comparative.coverage_differences.unwrap().len(),
            MAX_ARTICLES * (MAX_ARTICLES - 1) / 2
        );
    }

    #[tokio::test]
    async fn fetch_failure_becomes_sentinel_article() {
        let report = pipeline(vec![hit(0), hit(1)], None)
            .analyze("Acme")
            .await
            .unwrap();
        for article in &report.articles {
            assert_eq!(article.content, CONTENT_UNAVAILABLE);
            assert_eq!(article.summary, "Summary unavailable");
            // Topics still come from the title via the keyword fallback.
            assert_eq!(article.topics, vec!["Stock Market", "Financial Results"]);
        }
        assert!(report.comparative.error.is_none());
    }

    #[tokio::test]
    async fn single_hit_degrades_comparative_analysis() {
        let body = "Neutral filler text that says nothing in particular. ".repeat(4);
        let report = pipeline(vec![hit(0)], Some(body)).analyze("Acme").await.unwrap();
        assert_eq!(report.articles.len(), 1);
        assert!(report.comparative.error.is_some());
        assert!(report.comparative.sentiment_distribution.is_none());
    }

    #[tokio::test]
    async fn unreachable_source_is_fatal() {
        let pipeline = NewsPipeline::new(
            Arc::new(DownSource),
            Arc::new(FixedFetcher { body: None }),
            Arc::new(ScriptedGenerator::failing()),
        );
        let err = pipeline.analyze("Acme").await.unwrap_err();
        assert!(matches!(err, Error::News(_)));
    }

    #[tokio::test]
    async fn report_serializes_with_wire_names() {
        let body = "Great quarterly profit figures delighted investors. ".repeat(5);
        let report = pipeline(vec![hit(0), hit(1)], Some(body))
            .analyze("Acme")
            .await
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("Company").is_some());
        assert!(json.get("Articles").is_some());
        assert!(json.get("Comparative Sentiment Score").is_some());
        let first = &json["Articles"][0];
        assert!(first.get("Title").is_some());
        assert!(first.get("Summary").is_some());
        assert!(first.get("Sentiment").is_some());
        assert!(first.get("Topics").is_some());
    }
}
