use ns_core::{Sentiment, SentimentDistribution};

/// Qualitative verdict over the sentiment distribution. A category wins
/// only with a strict majority share over the larger of the other two;
/// ties and neutral dominance both read as mixed.
pub fn synthesize(distribution: &SentimentDistribution, company: &str) -> String {
    let total: usize = distribution.values().sum();
    if total == 0 {
        return format!("No sentiment data available for {company}.");
    }

    let percent = |sentiment: Sentiment| {
        distribution.get(&sentiment).copied().unwrap_or(0) as f64 / total as f64 * 100.0
    };
    let positive = percent(Sentiment::Positive);
    let negative = percent(Sentiment::Negative);
    let neutral = percent(Sentiment::Neutral);

    let (overall, impact) = if positive > negative.max(neutral) {
        ("mostly positive", "Potential stock growth expected")
    } else if negative > positive.max(neutral) {
        ("mostly negative", "Potential stock decline expected")
    } else {
        ("mixed or neutral", "Market reaction may be muted")
    };

    format!("{company}'s latest news coverage is {overall}. {impact}.")
}
