pub mod contact;
pub mod ids;
pub mod interaction;
pub mod photo;
pub mod socials;
pub mod tag;
pub mod text;

pub use contact::{Contact, ContactDraft, DEFAULT_PROFILE_PICTURE};
pub use ids::{ContactId, InteractionId};
pub use interaction::{Interaction, InteractionDraft};
pub use photo::{encode_data_uri, is_data_uri, mime_for_path};
pub use socials::{SocialPlatform, Socials};
pub use tag::{push_tag, remove_tag, tag_matches};
pub use text::{join_topics, normalize_optional, parse_topics};
