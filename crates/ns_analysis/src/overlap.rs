use std::collections::HashMap;

use ns_core::{ProcessedArticle, TopicOverlap};

/// Common vs. per-article-unique topics across the article set.
///
/// Counting is by global occurrence over the flattened topic stream: a
/// topic is common when it occurs more than once anywhere, and unique to
/// an article when its global count is exactly one. Common topics keep
/// first-seen order; unique lists keep each article's own topic order.
pub fn topic_overlap(articles: &[ProcessedArticle]) -> TopicOverlap {
    if articles.len() < 2 {
        return TopicOverlap::default();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for article in articles {
        for topic in &article.topics {
            let count = counts.entry(topic.as_str()).or_insert(0);
            if *count == 0 {
                first_seen.push(topic);
            }
            *count += 1;
        }
    }

    let common_topics = first_seen
        .iter()
        .filter(|topic| counts[**topic] > 1)
        .map(|topic| topic.to_string())
        .collect();

    let mut unique_topics_by_article = std::collections::BTreeMap::new();
    for (index, article) in articles.iter().enumerate() {
        let unique: Vec<String> = article
            .topics
            .iter()
            .filter(|topic| counts[topic.as_str()] == 1)
            .cloned()
            .collect();
        if !unique.is_empty() {
            unique_topics_by_article.insert(index + 1, unique);
        }
    }

    TopicOverlap {
        common_topics,
        unique_topics_by_article,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ns_core::Sentiment;

    fn article(topics: &[&str]) -> ProcessedArticle {
        ProcessedArticle {
            title: "t".to_string(),
            url: "u".to_string(),
            content: "c".to_string(),
            summary: "s".to_string(),
            sentiment: Sentiment::Neutral,
            topics: topics.iter().map(|t| t.to_string()).collect(),
            source: "src".to_string(),
        }
    }

    #[test]
    fn fewer_than_two_articles_yields_empty_result() {
        assert_eq!(topic_overlap(&[]), TopicOverlap::default());
        assert_eq!(topic_overlap(&[article(&["A"])]), TopicOverlap::default());
    }

    #[test]
    fn shared_topic_is_common_rest_are_unique() {
        let result = topic_overlap(&[article(&["A", "B"]), article(&["B", "C"])]);
        assert_eq!(result.common_topics, vec!["B"]);
        assert_eq!(result.unique_topics_by_article.len(), 2);
        assert_eq!(result.unique_topics_by_article[&1], vec!["A"]);
        assert_eq!(result.unique_topics_by_article[&2], vec!["C"]);
    }

    #[test]
    fn fully_shared_topics_leave_no_unique_entries() {
        let result = topic_overlap(&[article(&["A"]), article(&["A"])]);
        assert_eq!(result.common_topics, vec!["A"]);
        assert!(result.unique_topics_by_article.is_empty());
    }

    #[test]
    fn common_topics_keep_first_seen_order() {
        let result = topic_overlap(&[
            article(&["X", "Y", "Z"]),
            article(&["Z", "Y"]),
            article(&["X"]),
        ]);
        assert_eq!(result.common_topics, vec!["X", "Y", "Z"]);
        assert!(result.unique_topics_by_article.is_empty());
    }

    #[test]
    fn articles_with_nothing_unique_are_omitted() {
        let result = topic_overlap(&[article(&["A", "B"]), article(&["A"]), article(&["C"])]);
        assert_eq!(result.common_topics, vec!["A"]);
        assert_eq!(result.unique_topics_by_article[&1], vec!["B"]);
        assert!(!result.unique_topics_by_article.contains_key(&2));
        assert_eq!(result.unique_topics_by_article[&3], vec!["C"]);
    }
}
