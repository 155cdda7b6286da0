use std::sync::Arc;

use ns_core::{ComparativeAnalysis, ProcessedArticle, SentimentDistribution, TextGenerator};
use tracing::{debug, info};

use crate::compare::PairwiseComparator;
use crate::{overlap, verdict};

/// Orchestrates the cross-article analysis: sentiment rollup, ordered
/// pairwise comparisons, topic overlap and the final verdict. Never
/// fails for two or more articles; sub-component fallbacks absorb every
/// collaborator error.
pub struct ComparativeAnalysisAggregator {
    comparator: PairwiseComparator,
}

impl ComparativeAnalysisAggregator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            comparator: PairwiseComparator::new(generator),
        }
    }

    pub async fn aggregate(
        &self,
        articles: &[ProcessedArticle],
        company: &str,
    ) -> ComparativeAnalysis {
        if articles.len() < 2 {
            info!(count = articles.len(), "not enough articles for comparative analysis");
            return ComparativeAnalysis::not_enough_articles();
        }

        let mut distribution = SentimentDistribution::new();
        for article in articles {
            *distribution.entry(article.sentiment).or_insert(0) += 1;
        }

        // Every unordered pair, ascending (i, j), i < j, 1-based.
        let mut coverage_differences =
            Vec::with_capacity(articles.len() * (articles.len() - 1) / 2);
        for i in 0..articles.len() {
            for j in (i + 1)..articles.len() {
                debug!(pair = %format!("{} and {}", i + 1, j + 1), "comparing article pair");
                let record = self
                    .comparator
                    .compare(i + 1, &articles[i], j + 1, &articles[j])
                    .await;
                coverage_differences.push(record);
            }
        }

        let topic_overlap = overlap::topic_overlap(articles);
        let final_sentiment = verdict::synthesize(&distribution, company);
        info!(%company, pairs = coverage_differences.len(), "comparative analysis assembled");

        ComparativeAnalysis {
            sentiment_distribution: Some(distribution),
            coverage_differences: Some(coverage_differences),
            topic_overlap: Some(topic_overlap),
            final_sentiment_analysis: Some(final_sentiment),
            error: None,
        }
    }
}
