pub mod aggregate;
pub mod compare;
pub mod overlap;
pub mod pipeline;
pub mod sentiment;
pub mod summary;
pub mod topics;
pub mod verdict;

pub use aggregate::ComparativeAnalysisAggregator;
pub use pipeline::NewsPipeline;
pub use sentiment::SentimentClassifier;

pub mod prelude {
    pub use crate::aggregate::ComparativeAnalysisAggregator;
    pub use crate::pipeline::NewsPipeline;
    pub use ns_core::{ComparativeAnalysis, CompanyReport, ProcessedArticle, Result, Sentiment};
}
