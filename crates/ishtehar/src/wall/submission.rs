use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Category, Post, PostId, PostStatus, PostType};
use super::store::PostStore;

/// Raw user input for a new post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub content: String,
    #[serde(rename = "type")]
    pub post_type: PostType,
    pub category: Category,
    #[serde(default)]
    pub author_name: Option<String>,
}

impl Submission {
    pub fn text(content: impl Into<String>, category: Category) -> Self {
        Self {
            content: content.into(),
            post_type: PostType::Text,
            category,
            author_name: None,
        }
    }

    pub fn media(post_type: PostType, reference: impl Into<String>, category: Category) -> Self {
        Self {
            content: reference.into(),
            post_type,
            category,
            author_name: None,
        }
    }

    pub fn by(mut self, author_name: impl Into<String>) -> Self {
        self.author_name = Some(author_name.into());
        self
    }

    /// Checks the preconditions an interactive form enforces before it lets
    /// the user submit. Blank author names are normalized to `None`.
    pub fn validated(mut self) -> Result<Self, SubmissionError> {
        if self.content.trim().is_empty() {
            return Err(if self.post_type.is_media() {
                SubmissionError::MissingMedia(self.post_type)
            } else {
                SubmissionError::EmptyContent
            });
        }

        if self
            .author_name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            self.author_name = None;
        }

        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("post content must not be empty")]
    EmptyContent,
    #[error("a {} post requires a media reference", .0.key())]
    MissingMedia(PostType),
}

/// Builds a pending post stamped `now` and places it at the head of the store.
/// Never fails; callers are expected to have validated the input already.
pub fn submit_at(store: &mut PostStore, submission: Submission, now: DateTime<Utc>) -> Post {
    let Submission {
        content,
        post_type,
        category,
        author_name,
    } = submission;

    let post = Post {
        id: PostId::generate(),
        post_type,
        content,
        category,
        status: PostStatus::Pending,
        timestamp: now,
        likes: 0,
        author_name,
    };

    tracing::debug!(post_id = %post.id, kind = post_type.key(), category = category.key(), "post submitted");
    store.prepend(post.clone());
    post
}

pub fn submit(store: &mut PostStore, submission: Submission) -> Post {
    submit_at(store, submission, Utc::now())
}
