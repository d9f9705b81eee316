use crate::domain::ids::InteractionId;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: InteractionId,
    pub date: String,
    pub topics: Vec<String>,
    pub medium: String,
}

/// In-progress "add interaction" input. Every field is optional until the
/// draft is turned into an [`Interaction`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionDraft {
    pub date: Option<String>,
    pub topics: Option<Vec<String>>,
    pub medium: Option<String>,
}

impl InteractionDraft {
    pub fn new(date: &str, topics: Vec<String>, medium: &str) -> Self {
        Self {
            date: Some(date.to_string()),
            topics: Some(topics),
            medium: Some(medium.to_string()),
        }
    }

    /// Date and medium must be present; topics default to an empty list.
    pub fn into_interaction(self) -> Result<Interaction, CoreError> {
        let date = self
            .date
            .filter(|value| !value.is_empty())
            .ok_or(CoreError::MissingInteractionDate)?;
        let medium = self
            .medium
            .filter(|value| !value.is_empty())
            .ok_or(CoreError::MissingInteractionMedium)?;
        Ok(Interaction {
            id: InteractionId::new(),
            date,
            topics: self.topics.unwrap_or_default(),
            medium,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::InteractionDraft;
    use crate::error::CoreError;

    #[test]
    fn draft_without_topics_defaults_to_empty() {
        let draft = InteractionDraft {
            date: Some("2024-01-01".to_string()),
            topics: None,
            medium: Some("Email".to_string()),
        };
        let interaction = draft.into_interaction().expect("complete draft");
        assert!(interaction.topics.is_empty());
        assert_eq!(interaction.medium, "Email");
    }

    #[test]
    fn draft_requires_date_and_medium() {
        let missing_date = InteractionDraft {
            medium: Some("Email".to_string()),
            ..Default::default()
        };
        assert_eq!(
            missing_date.into_interaction().unwrap_err(),
            CoreError::MissingInteractionDate
        );

        let empty_medium = InteractionDraft::new("2024-01-01", Vec::new(), "");
        assert_eq!(
            empty_medium.into_interaction().unwrap_err(),
            CoreError::MissingInteractionMedium
        );
    }
}
