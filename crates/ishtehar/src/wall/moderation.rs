use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{ModerationDecision, Post, PostId, PostStatus};
use super::store::{PostSnapshot, PostStore};

/// Explicit acknowledgement required before a destructive ban runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BanConfirmation {
    Confirmed,
    Declined,
}

impl From<bool> for BanConfirmation {
    fn from(value: bool) -> Self {
        if value {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BanOutcome {
    /// Nothing was attempted because no author name was given.
    SkippedNoAuthor,
    /// The caller did not confirm the ban.
    SkippedUnconfirmed,
    Removed { count: usize },
}

/// Pending posts in store order.
pub fn pending(snapshot: &PostSnapshot) -> Vec<Post> {
    snapshot
        .iter()
        .filter(|post| post.status == PostStatus::Pending)
        .cloned()
        .collect()
}

/// Records the admin decision on a post. Unknown ids are ignored and reported
/// as `false`.
pub fn set_status(store: &mut PostStore, id: &PostId, decision: ModerationDecision) -> bool {
    let status = decision.status();
    let updated = store.update_by_id(id, |post| post.status = status);
    if updated {
        info!(post_id = %id, status = status.label(), "moderation decision recorded");
    }
    updated
}

/// Purges every post whose author name equals `author_name` exactly.
///
/// Matching is on the display name only, so distinct people sharing a name
/// are banned together. Posts without an author are never matched.
pub fn ban_author(
    store: &mut PostStore,
    author_name: Option<&str>,
    confirmation: BanConfirmation,
) -> BanOutcome {
    let Some(name) = author_name.filter(|name| !name.is_empty()) else {
        return BanOutcome::SkippedNoAuthor;
    };

    if confirmation == BanConfirmation::Declined {
        return BanOutcome::SkippedUnconfirmed;
    }

    let count = store.remove_where(|post| post.is_authored_by(name));
    warn!(author = name, removed = count, "author banned");
    BanOutcome::Removed { count }
}
