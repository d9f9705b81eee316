use crate::domain::{join_topics, Contact, ContactId, InteractionId};
use crate::time::format_interaction_date;
use serde::{Deserialize, Serialize};

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_INTERACTIONS: &str = "No interactions";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRowDto {
    pub id: ContactId,
    pub name: String,
    pub initials: String,
    pub email: String,
    pub tags: Vec<String>,
    pub last_interaction: String,
}

impl ContactRowDto {
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name.clone(),
            initials: contact.initials(),
            email: or_not_available(contact.email.as_deref()),
            tags: contact.tags.clone(),
            last_interaction: contact
                .last_interaction()
                .map(|interaction| format_interaction_date(&interaction.date))
                .unwrap_or_else(|| NO_INTERACTIONS.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinkDto {
    pub label: String,
    pub handle: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRowDto {
    pub id: InteractionId,
    pub date: String,
    pub topics: String,
    pub medium: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetailDto {
    pub id: ContactId,
    pub name: String,
    pub initials: String,
    pub profile_picture: String,
    pub email: String,
    pub phone: String,
    pub how_we_met: String,
    pub social_links: Vec<SocialLinkDto>,
    pub personal_site: Option<String>,
    pub notes: String,
    pub tags: Vec<String>,
    pub interactions: Vec<InteractionRowDto>,
}

impl ContactDetailDto {
    pub fn from_contact(contact: &Contact) -> Self {
        let social_links = contact
            .socials
            .entries()
            .map(|(platform, handle)| SocialLinkDto {
                label: platform.label().to_string(),
                handle: handle.to_string(),
                url: platform.profile_url(handle),
            })
            .collect();
        let interactions = contact
            .interactions
            .iter()
            .map(|interaction| InteractionRowDto {
                id: interaction.id,
                date: format_interaction_date(&interaction.date),
                topics: join_topics(&interaction.topics),
                medium: interaction.medium.clone(),
            })
            .collect();
        Self {
            id: contact.id,
            name: contact.name.clone(),
            initials: contact.initials(),
            profile_picture: contact.profile_picture.clone(),
            email: or_not_available(contact.email.as_deref()),
            phone: or_not_available(contact.phone.as_deref()),
            how_we_met: or_not_available(contact.how_we_met.as_deref()),
            social_links,
            personal_site: contact.personal_site.clone(),
            notes: contact.notes.clone(),
            tags: contact.tags.clone(),
            interactions,
        }
    }
}

fn or_not_available(value: Option<&str>) -> String {
    value
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}
