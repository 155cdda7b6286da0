use ns_core::Sentiment;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Compound score at or above this is Positive, at or below its negation
/// Negative. The values are part of the external contract and must not
/// drift.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Lexicon/rule-based sentiment classifier. Construct once and share;
/// the analyzer is stateless across calls.
pub struct SentimentClassifier {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentClassifier {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    pub fn classify(&self, text: &str) -> Sentiment {
        let scores = self.analyzer.polarity_scores(text);
        let compound = scores.get("compound").copied().unwrap_or(0.0);
        Self::from_compound(compound)
    }

    /// Threshold rule over a compound polarity score in [-1, 1].
    pub fn from_compound(score: f64) -> Sentiment {
        if score >= POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if score <= -POSITIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_scores() {
        assert_eq!(SentimentClassifier::from_compound(0.05), Sentiment::Positive);
        assert_eq!(SentimentClassifier::from_compound(0.049999), Sentiment::Neutral);
        assert_eq!(SentimentClassifier::from_compound(-0.05), Sentiment::Negative);
        assert_eq!(SentimentClassifier::from_compound(-0.049999), Sentiment::Neutral);
    }

    #[test]
    fn extremes() {
        assert_eq!(SentimentClassifier::from_compound(1.0), Sentiment::Positive);
        assert_eq!(SentimentClassifier::from_compound(-1.0), Sentiment::Negative);
        assert_eq!(SentimentClassifier::from_compound(0.0), Sentiment::Neutral);
    }

    #[test]
    fn classifies_plain_text() {
        let classifier = SentimentClassifier::new();
        assert_eq!(
            classifier.classify("The launch was a great success and investors are thrilled"),
            Sentiment::Positive
        );
        assert_eq!(
            classifier.classify("The company faces a terrible crisis after the awful scandal"),
            Sentiment::Negative
        );
    }

    #[test]
    fn empty_text_is_neutral() {
        let classifier = SentimentClassifier::new();
        assert_eq!(classifier.classify(""), Sentiment::Neutral);
    }
}
