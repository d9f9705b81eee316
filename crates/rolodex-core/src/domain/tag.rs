/// Tags are free text and kept exactly as entered; the list may hold
/// duplicates.
pub fn push_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    if tag.is_empty() {
        return false;
    }
    tags.push(tag.to_string());
    true
}

/// Removes every occurrence of `tag`. Returns how many were removed.
pub fn remove_tag(tags: &mut Vec<String>, tag: &str) -> usize {
    let before = tags.len();
    tags.retain(|existing| existing != tag);
    before - tags.len()
}

pub fn tag_matches(tag: &str, needle_lower: &str) -> bool {
    tag.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::{push_tag, remove_tag, tag_matches};

    #[test]
    fn push_tag_keeps_duplicates() {
        let mut tags = vec!["Tech".to_string()];
        assert!(push_tag(&mut tags, "Tech"));
        assert_eq!(tags, vec!["Tech", "Tech"]);
    }

    #[test]
    fn push_tag_rejects_empty() {
        let mut tags = Vec::new();
        assert!(!push_tag(&mut tags, ""));
        assert!(tags.is_empty());
    }

    #[test]
    fn remove_tag_drops_all_exact_matches() {
        let mut tags = vec![
            "AI".to_string(),
            "Tech".to_string(),
            "AI".to_string(),
            "ai".to_string(),
        ];
        assert_eq!(remove_tag(&mut tags, "AI"), 2);
        assert_eq!(tags, vec!["Tech", "ai"]);
    }

    #[test]
    fn tag_matches_substring_case_insensitive() {
        assert!(tag_matches("Networking", "work"));
        assert!(!tag_matches("Finance", "tech"));
    }
}
