use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// Ids are UUID v7: the leading bits are a millisecond timestamp, so ids minted
// later sort later and two ids minted in the same process never collide.
macro_rules! id_type {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

id_type!(ContactId);
id_type!(InteractionId);

#[cfg(test)]
mod tests {
    use super::{ContactId, InteractionId};

    #[test]
    fn ids_are_unique_and_ordered_by_creation() {
        let first = ContactId::new();
        let second = ContactId::new();
        assert_ne!(first, second);
        assert!(first < second);
    }

    #[test]
    fn id_parses_from_display() {
        let id = InteractionId::new();
        let parsed: InteractionId = id.to_string().parse().expect("parse id");
        assert_eq!(parsed, id);
    }
}
