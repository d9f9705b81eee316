use crate::domain::ids::ContactId;
use crate::domain::interaction::Interaction;
use crate::domain::socials::Socials;
use crate::domain::text::normalize_optional;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROFILE_PICTURE: &str = "/placeholder.svg?height=40&width=40";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub profile_picture: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub socials: Socials,
    pub personal_site: Option<String>,
    pub notes: String,
    pub tags: Vec<String>,
    pub how_we_met: Option<String>,
    pub interactions: Vec<Interaction>,
}

impl Contact {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(())
    }

    /// Avatar fallback text: the first character of every space-separated
    /// word in the name.
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .collect()
    }

    /// The most recently appended interaction. The log is kept in entry
    /// order, so this is not necessarily the latest date.
    pub fn last_interaction(&self) -> Option<&Interaction> {
        self.interactions.last()
    }
}

/// Input of the "add contact" row: a name and an optional email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
}

impl ContactDraft {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            email: String::new(),
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn into_contact(self, profile_picture: &str) -> Result<Contact, CoreError> {
        let contact = Contact {
            id: ContactId::new(),
            name: self.name,
            profile_picture: profile_picture.to_string(),
            email: normalize_optional(&self.email),
            phone: None,
            socials: Socials::default(),
            personal_site: None,
            notes: String::new(),
            tags: Vec::new(),
            how_we_met: None,
            interactions: Vec::new(),
        };
        contact.validate()?;
        Ok(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactDraft, DEFAULT_PROFILE_PICTURE};
    use crate::error::CoreError;

    #[test]
    fn draft_requires_name() {
        let err = ContactDraft::new("")
            .into_contact(DEFAULT_PROFILE_PICTURE)
            .unwrap_err();
        assert_eq!(err, CoreError::EmptyName);
    }

    #[test]
    fn draft_keeps_name_as_typed() {
        let contact = ContactDraft::new("  Zed ")
            .into_contact(DEFAULT_PROFILE_PICTURE)
            .expect("contact");
        assert_eq!(contact.name, "  Zed ");

        let blank = ContactDraft::new("   ")
            .into_contact(DEFAULT_PROFILE_PICTURE)
            .expect("whitespace name is present");
        assert_eq!(blank.name, "   ");
    }

    #[test]
    fn draft_builds_empty_contact() {
        let contact = ContactDraft::new("Zed")
            .with_email(" zed@example.com ")
            .into_contact(DEFAULT_PROFILE_PICTURE)
            .expect("contact");
        assert_eq!(contact.name, "Zed");
        assert_eq!(contact.email.as_deref(), Some("zed@example.com"));
        assert_eq!(contact.profile_picture, DEFAULT_PROFILE_PICTURE);
        assert!(contact.tags.is_empty());
        assert!(contact.socials.is_empty());
        assert!(contact.interactions.is_empty());
    }

    #[test]
    fn initials_take_first_letter_of_each_word() {
        let contact = ContactDraft::new("Alice Johnson")
            .into_contact(DEFAULT_PROFILE_PICTURE)
            .expect("contact");
        assert_eq!(contact.initials(), "AJ");
    }
}
