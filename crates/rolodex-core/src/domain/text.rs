/// Blank form input means "not set".
pub fn normalize_optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Splits a comma-separated topics field, trimming each entry.
pub fn parse_topics(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|topic| topic.trim().to_string()).collect()
}

pub fn join_topics(topics: &[String]) -> String {
    topics.join(", ")
}

#[cfg(test)]
mod tests {
    use super::{join_topics, normalize_optional, parse_topics};

    #[test]
    fn normalize_optional_trims_and_drops_blank() {
        assert_eq!(normalize_optional("  555-1234 ").as_deref(), Some("555-1234"));
        assert!(normalize_optional("   ").is_none());
    }

    #[test]
    fn parse_topics_splits_and_trims() {
        assert_eq!(
            parse_topics("AI, Startup funding ,Conference"),
            vec!["AI", "Startup funding", "Conference"]
        );
    }

    #[test]
    fn parse_topics_blank_is_empty() {
        assert!(parse_topics("  ").is_empty());
    }

    #[test]
    fn join_topics_uses_comma_space() {
        let topics = vec!["Hiking trip".to_string(), "Investment advice".to_string()];
        assert_eq!(join_topics(&topics), "Hiking trip, Investment advice");
    }
}
