use crate::domain::{Contact, ContactId, SocialPlatform};

/// An editable field of the detail form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    HowWeMet,
    Social(SocialPlatform),
    PersonalSite,
    Notes,
}

impl ContactField {
    /// Form order: left column then right column.
    pub const ALL: [ContactField; 9] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::HowWeMet,
        ContactField::Social(SocialPlatform::Linkedin),
        ContactField::Social(SocialPlatform::Twitter),
        ContactField::Social(SocialPlatform::Instagram),
        ContactField::PersonalSite,
        ContactField::Notes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::HowWeMet => "How We Met",
            ContactField::Social(SocialPlatform::Linkedin) => "LinkedIn",
            ContactField::Social(SocialPlatform::Twitter) => "Twitter",
            ContactField::Social(SocialPlatform::Instagram) => "Instagram",
            ContactField::PersonalSite => "Personal Site",
            ContactField::Notes => "Notes",
        }
    }

    /// Current value as form text; absent optional fields read as "".
    pub fn read(self, contact: &Contact) -> String {
        let value = match self {
            ContactField::Name => Some(contact.name.as_str()),
            ContactField::Email => contact.email.as_deref(),
            ContactField::Phone => contact.phone.as_deref(),
            ContactField::HowWeMet => contact.how_we_met.as_deref(),
            ContactField::Social(platform) => contact.socials.get(platform),
            ContactField::PersonalSite => contact.personal_site.as_deref(),
            ContactField::Notes => Some(contact.notes.as_str()),
        };
        value.unwrap_or_default().to_string()
    }

    /// Writes form text into `contact` verbatim so partially typed values
    /// keep their spacing; the optional fields store `None` when emptied.
    pub fn write(self, contact: &mut Contact, value: String) {
        match self {
            ContactField::Name => contact.name = value,
            ContactField::Notes => contact.notes = value,
            ContactField::Email => contact.email = non_empty(value),
            ContactField::Phone => contact.phone = non_empty(value),
            ContactField::HowWeMet => contact.how_we_met = non_empty(value),
            ContactField::PersonalSite => contact.personal_site = non_empty(value),
            ContactField::Social(platform) => {
                contact.socials.set(platform, non_empty(value))
            }
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// A detached copy of the selected contact, tagged with the edit session it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub(crate) session: u64,
    pub(crate) contact: Contact,
}

impl EditBuffer {
    pub fn contact(&self) -> &Contact {
        &self.contact
    }
}

/// Handed out when a photo read starts; the read result is only applied if
/// the same edit session is still open when it arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    pub contact_id: ContactId,
    pub session: u64,
}

#[cfg(test)]
mod tests {
    use super::ContactField;
    use crate::domain::{ContactDraft, SocialPlatform, DEFAULT_PROFILE_PICTURE};

    #[test]
    fn write_empty_optional_field_clears_it() {
        let mut contact = ContactDraft::new("Ada")
            .with_email("ada@example.com")
            .into_contact(DEFAULT_PROFILE_PICTURE)
            .expect("contact");
        ContactField::Email.write(&mut contact, String::new());
        assert!(contact.email.is_none());
        assert_eq!(ContactField::Email.read(&contact), "");
    }

    #[test]
    fn social_fields_round_trip() {
        let mut contact = ContactDraft::new("Ada")
            .into_contact(DEFAULT_PROFILE_PICTURE)
            .expect("contact");
        let field = ContactField::Social(SocialPlatform::Twitter);
        field.write(&mut contact, "ada".to_string());
        assert_eq!(contact.socials.twitter.as_deref(), Some("ada"));
        assert_eq!(field.read(&contact), "ada");
        assert_eq!(field.label(), "Twitter");
    }

    #[test]
    fn name_is_stored_verbatim() {
        let mut contact = ContactDraft::new("Ada")
            .into_contact(DEFAULT_PROFILE_PICTURE)
            .expect("contact");
        ContactField::Name.write(&mut contact, "Ada ".to_string());
        assert_eq!(contact.name, "Ada ");
    }
}
