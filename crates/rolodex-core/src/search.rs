use crate::domain::{tag_matches, Contact};

/// A free-text search over name, email, and tags.
///
/// Matching is a case-insensitive substring test; an empty query matches
/// every contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        if contact.name.to_lowercase().contains(&self.needle) {
            return true;
        }
        if contact
            .email
            .as_deref()
            .is_some_and(|email| email.to_lowercase().contains(&self.needle))
        {
            return true;
        }
        contact
            .tags
            .iter()
            .any(|tag| tag_matches(tag, &self.needle))
    }
}

/// Filters `contacts` without touching them; directory order is preserved.
pub fn search<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let query = SearchQuery::new(query);
    contacts
        .iter()
        .filter(|contact| query.matches(contact))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{search, SearchQuery};
    use crate::domain::{ContactDraft, DEFAULT_PROFILE_PICTURE};

    fn contact(name: &str, email: &str, tags: &[&str]) -> crate::domain::Contact {
        let mut contact = ContactDraft::new(name)
            .with_email(email)
            .into_contact(DEFAULT_PROFILE_PICTURE)
            .expect("contact");
        contact.tags = tags.iter().map(|tag| tag.to_string()).collect();
        contact
    }

    #[test]
    fn empty_query_matches_everything() {
        let contacts = vec![contact("Ada", "", &[]), contact("Grace", "", &[])];
        assert_eq!(search(&contacts, "").len(), 2);
        assert!(SearchQuery::new("").is_empty());
    }

    #[test]
    fn matches_name_email_and_tags_case_insensitive() {
        let contacts = vec![
            contact("Alice Johnson", "alice@example.com", &["Tech"]),
            contact("Bob Smith", "", &["Finance", "Outdoors"]),
        ];

        let by_name = search(&contacts, "JOHN");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Alice Johnson");

        let by_email = search(&contacts, "example.COM");
        assert_eq!(by_email.len(), 1);

        let by_tag = search(&contacts, "door");
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].name, "Bob Smith");

        assert!(search(&contacts, "zzz").is_empty());
    }

    #[test]
    fn missing_email_never_matches_email_text() {
        let contacts = vec![contact("Bob Smith", "", &[])];
        assert!(search(&contacts, "@").is_empty());
    }
}
