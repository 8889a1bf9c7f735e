use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier assigned to a post when it is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl PostId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostType {
    Text,
    Image,
    Audio,
}

impl PostType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Text, Self::Image, Self::Audio]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Image => "IMAGE",
            Self::Audio => "AUDIO",
        }
    }

    pub const fn is_media(self) -> bool {
        matches!(self, Self::Image | Self::Audio)
    }
}

impl FromStr for PostType {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "post type",
                value: value.to_string(),
            })
    }
}

/// Topical tag attached to every post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Education,
    Health,
    Economy,
    Justice,
    Administration,
    Culture,
    Agriculture,
    Others,
}

impl Category {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Education,
            Self::Health,
            Self::Economy,
            Self::Justice,
            Self::Administration,
            Self::Culture,
            Self::Agriculture,
            Self::Others,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Health => "health",
            Self::Economy => "economy",
            Self::Justice => "justice",
            Self::Administration => "administration",
            Self::Culture => "culture",
            Self::Agriculture => "agriculture",
            Self::Others => "others",
        }
    }

    /// Bengali display label, also used when posts are rendered into prompts.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Education => "শিক্ষা",
            Self::Health => "স্বাস্থ্য",
            Self::Economy => "অর্থনীতি",
            Self::Justice => "বিচার বিভাগ",
            Self::Administration => "প্রশাসন",
            Self::Culture => "সংস্কৃতি",
            Self::Agriculture => "কৃষি",
            Self::Others => "অন্যান্য",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|category| {
                category.key().eq_ignore_ascii_case(trimmed) || category.label() == trimmed
            })
            .ok_or_else(|| UnknownVariant {
                kind: "category",
                value: value.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    Pending,
    Approved,
    Rejected,
}

impl PostStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Approved, Self::Pending, Self::Rejected]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// Admin verdict on a pending post. `Pending` is deliberately absent: a post
/// can never be moved back into the moderation queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModerationDecision {
    Approved,
    Rejected,
}

impl ModerationDecision {
    pub const fn status(self) -> PostStatus {
        match self {
            Self::Approved => PostStatus::Approved,
            Self::Rejected => PostStatus::Rejected,
        }
    }
}

impl TryFrom<PostStatus> for ModerationDecision {
    type Error = PostStatus;

    fn try_from(value: PostStatus) -> Result<Self, Self::Error> {
        match value {
            PostStatus::Approved => Ok(Self::Approved),
            PostStatus::Rejected => Ok(Self::Rejected),
            PostStatus::Pending => Err(PostStatus::Pending),
        }
    }
}

/// A single statement of public opinion plus its moderation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    #[serde(rename = "type")]
    pub post_type: PostType,
    pub content: String,
    pub category: Category,
    pub status: PostStatus,
    pub timestamp: DateTime<Utc>,
    pub likes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
}

impl Post {
    pub fn is_authored_by(&self, name: &str) -> bool {
        self.author_name.as_deref() == Some(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_from_key_or_label() {
        assert_eq!("education".parse::<Category>(), Ok(Category::Education));
        assert_eq!("কৃষি".parse::<Category>(), Ok(Category::Agriculture));
        assert!("sports".parse::<Category>().is_err());
    }

    #[test]
    fn post_type_parse_is_case_insensitive() {
        assert_eq!("image".parse::<PostType>(), Ok(PostType::Image));
        assert_eq!(" AUDIO ".parse::<PostType>(), Ok(PostType::Audio));
    }

    #[test]
    fn pending_is_not_a_moderation_decision() {
        assert!(ModerationDecision::try_from(PostStatus::Pending).is_err());
        assert_eq!(
            ModerationDecision::try_from(PostStatus::Rejected),
            Ok(ModerationDecision::Rejected)
        );
    }

    #[test]
    fn post_serializes_with_camel_case_fields() {
        let post = Post {
            id: PostId::from("1"),
            post_type: PostType::Text,
            content: "hello".to_string(),
            category: Category::Health,
            status: PostStatus::Pending,
            timestamp: DateTime::<Utc>::from_timestamp_millis(0).expect("epoch"),
            likes: 0,
            author_name: Some("রহিম".to_string()),
        };

        let value = serde_json::to_value(&post).expect("serializes");
        assert_eq!(value["type"], "TEXT");
        assert_eq!(value["status"], "PENDING");
        assert_eq!(value["category"], "health");
        assert_eq!(value["authorName"], "রহিম");
    }
}
