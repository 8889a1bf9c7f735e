use std::sync::{Arc, Mutex};

use tokio_util::sync::CancellationToken;

use super::analytics::WallAnalytics;
use super::domain::{ModerationDecision, Post, PostId};
use super::moderation::{self, BanConfirmation, BanOutcome};
use super::public::{public_wall, WallFilter};
use super::store::{PostSnapshot, PostStore};
use super::submission::{self, Submission};
use crate::manifesto::{ManifestoGenerator, ManifestoSummarizer, SummaryRefusal};

/// Owns the post store and exposes its mutation entry points and derived
/// views. Each mutation runs to completion under the store lock; readers work
/// from snapshots taken under the lock and released immediately.
pub struct WallService<G> {
    store: Mutex<PostStore>,
    summarizer: ManifestoSummarizer<G>,
}

impl<G> WallService<G>
where
    G: ManifestoGenerator + 'static,
{
    pub fn new(store: PostStore, summarizer: ManifestoSummarizer<G>) -> Self {
        Self {
            store: Mutex::new(store),
            summarizer,
        }
    }

    pub fn with_generator(store: PostStore, generator: Arc<G>) -> Self {
        Self::new(store, ManifestoSummarizer::new(generator))
    }

    pub fn snapshot(&self) -> PostSnapshot {
        self.store.lock().expect("store mutex poisoned").snapshot()
    }

    fn mutate<T>(&self, operation: impl FnOnce(&mut PostStore) -> T) -> T {
        let mut guard = self.store.lock().expect("store mutex poisoned");
        operation(&mut *guard)
    }

    pub fn submit(&self, input: Submission) -> Post {
        self.mutate(|store| submission::submit(store, input))
    }

    pub fn like(&self, id: &PostId) -> bool {
        self.mutate(|store| store.like(id))
    }

    pub fn set_status(&self, id: &PostId, decision: ModerationDecision) -> bool {
        self.mutate(|store| moderation::set_status(store, id, decision))
    }

    pub fn ban_author(&self, author_name: Option<&str>, confirmation: BanConfirmation) -> BanOutcome {
        self.mutate(|store| moderation::ban_author(store, author_name, confirmation))
    }

    pub fn pending(&self) -> Vec<Post> {
        moderation::pending(&self.snapshot())
    }

    pub fn public_wall(&self, filter: &WallFilter) -> Vec<Post> {
        public_wall(&self.snapshot(), filter)
    }

    pub fn analytics(&self) -> WallAnalytics {
        WallAnalytics::from_snapshot(&self.snapshot())
    }

    pub fn manifesto_in_flight(&self) -> bool {
        self.summarizer.is_in_flight()
    }

    pub async fn draft_manifesto(&self) -> Result<String, SummaryRefusal> {
        let snapshot = self.snapshot();
        self.summarizer.summarize(&snapshot).await
    }

    pub async fn draft_manifesto_with_cancel(
        &self,
        cancel: &CancellationToken,
    ) -> Result<String, SummaryRefusal> {
        let snapshot = self.snapshot();
        self.summarizer.summarize_with_cancel(&snapshot, cancel).await
    }
}
