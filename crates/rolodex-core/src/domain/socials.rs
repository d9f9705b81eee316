use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Linkedin,
    Twitter,
    Instagram,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 3] = [
        SocialPlatform::Linkedin,
        SocialPlatform::Twitter,
        SocialPlatform::Instagram,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Instagram => "instagram",
        }
    }

    /// Display label: the key with its first letter upper-cased.
    pub const fn label(self) -> &'static str {
        match self {
            SocialPlatform::Linkedin => "Linkedin",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Instagram => "Instagram",
        }
    }

    pub fn profile_url(self, handle: &str) -> String {
        format!("https://www.{}.com/{}", self.as_str(), handle)
    }
}

/// Handles keyed by platform. The key set is fixed; a platform without a
/// handle is simply absent from the rendered links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
}

impl Socials {
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        match platform {
            SocialPlatform::Linkedin => self.linkedin.as_deref(),
            SocialPlatform::Twitter => self.twitter.as_deref(),
            SocialPlatform::Instagram => self.instagram.as_deref(),
        }
    }

    pub fn set(&mut self, platform: SocialPlatform, handle: Option<String>) {
        let slot = match platform {
            SocialPlatform::Linkedin => &mut self.linkedin,
            SocialPlatform::Twitter => &mut self.twitter,
            SocialPlatform::Instagram => &mut self.instagram,
        };
        *slot = handle;
    }

    pub fn is_empty(&self) -> bool {
        SocialPlatform::ALL
            .iter()
            .all(|platform| self.get(*platform).is_none())
    }

    /// Platforms that carry a handle, in fixed platform order.
    pub fn entries(&self) -> impl Iterator<Item = (SocialPlatform, &str)> + '_ {
        SocialPlatform::ALL
            .into_iter()
            .filter_map(|platform| self.get(platform).map(|handle| (platform, handle)))
    }
}
