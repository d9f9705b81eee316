use crate::domain::{Contact, ContactId, Interaction, InteractionId, Socials};

fn interaction(date: &str, topics: &[&str], medium: &str) -> Interaction {
    Interaction {
        id: InteractionId::new(),
        date: date.to_string(),
        topics: topics.iter().map(|topic| topic.to_string()).collect(),
        medium: medium.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// The two contacts a fresh session starts with.
pub fn demo_contacts(profile_picture: &str) -> Vec<Contact> {
    vec![
        Contact {
            id: ContactId::new(),
            name: "Alice Johnson".to_string(),
            profile_picture: profile_picture.to_string(),
            email: Some("alice@example.com".to_string()),
            phone: Some("(555) 123-4567".to_string()),
            socials: Socials {
                linkedin: Some("alice-johnson".to_string()),
                twitter: Some("alicejohnson".to_string()),
                instagram: Some("alice.j".to_string()),
            },
            personal_site: Some("https://alicejohnson.com".to_string()),
            notes: "Interested in AI and machine learning.".to_string(),
            tags: strings(&["Tech", "AI", "Networking"]),
            how_we_met: Some("Met at Mercury Founders Event".to_string()),
            interactions: vec![
                interaction("2023-06-15", &["AI", "Startup funding"], "In-person"),
                interaction("2023-07-01", &["Machine learning", "Conference"], "Video call"),
            ],
        },
        Contact {
            id: ContactId::new(),
            name: "Bob Smith".to_string(),
            profile_picture: profile_picture.to_string(),
            email: None,
            phone: Some("(555) 987-6543".to_string()),
            socials: Socials {
                linkedin: Some("bob-smith".to_string()),
                twitter: None,
                instagram: Some("bobsmith".to_string()),
            },
            personal_site: None,
            notes: "Works in finance. Loves hiking and photography.".to_string(),
            tags: strings(&["Finance", "Outdoors", "Photography"]),
            how_we_met: Some("College roommate".to_string()),
            interactions: vec![interaction(
                "2023-05-20",
                &["Hiking trip", "Investment advice"],
                "Phone call",
            )],
        },
    ]
}
