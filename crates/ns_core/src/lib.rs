pub mod error;
pub mod models;
pub mod text;
pub mod types;

pub use error::Error;
pub use models::{ArticleFetcher, NewsSource, SpeechSynthesizer, TextGenerator, Translator};
pub use types::{
    ComparativeAnalysis, ComparisonRecord, CompanyReport, ProcessedArticle, RawArticle, Sentiment,
    SentimentDistribution, TopicOverlap, CONTENT_UNAVAILABLE,
};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::models::{ArticleFetcher, NewsSource, SpeechSynthesizer, TextGenerator, Translator};
    pub use crate::types::{
        ComparativeAnalysis, ComparisonRecord, CompanyReport, ProcessedArticle, RawArticle,
        Sentiment, SentimentDistribution, TopicOverlap,
    };
    pub use crate::{Error, Result};
}
