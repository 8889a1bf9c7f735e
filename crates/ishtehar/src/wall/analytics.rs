use serde::Serialize;

use super::domain::{Category, PostStatus};
use super::store::PostSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: PostStatus,
    pub label: &'static str,
    pub count: usize,
}

/// Admin dashboard figures over the whole store, every status included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WallAnalytics {
    pub total: usize,
    pub category_breakdown: Vec<CategoryCount>,
    pub status_breakdown: Vec<StatusCount>,
}

impl WallAnalytics {
    pub fn from_snapshot(snapshot: &PostSnapshot) -> Self {
        let category_breakdown = Category::ordered()
            .into_iter()
            .map(|category| CategoryCount {
                category,
                label: category.label(),
                count: snapshot
                    .iter()
                    .filter(|post| post.category == category)
                    .count(),
            })
            .collect();

        let status_breakdown = PostStatus::ordered()
            .into_iter()
            .map(|status| StatusCount {
                status,
                label: status.label(),
                count: snapshot.iter().filter(|post| post.status == status).count(),
            })
            .collect();

        Self {
            total: snapshot.len(),
            category_breakdown,
            status_breakdown,
        }
    }

    pub fn status_count(&self, status: PostStatus) -> usize {
        self.status_breakdown
            .iter()
            .find(|entry| entry.status == status)
            .map_or(0, |entry| entry.count)
    }

    pub fn category_count(&self, category: Category) -> usize {
        self.category_breakdown
            .iter()
            .find(|entry| entry.category == category)
            .map_or(0, |entry| entry.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wall::seed::seed_posts;
    use crate::wall::store::PostStore;
    use chrono::Utc;

    #[test]
    fn seed_data_breakdown_matches_dashboard() {
        let store = PostStore::with_posts(seed_posts(Utc::now()));
        let analytics = WallAnalytics::from_snapshot(&store.snapshot());

        assert_eq!(analytics.total, 4);
        assert_eq!(analytics.status_count(PostStatus::Approved), 3);
        assert_eq!(analytics.status_count(PostStatus::Pending), 1);
        assert_eq!(analytics.status_count(PostStatus::Rejected), 0);
        assert_eq!(analytics.category_breakdown.len(), Category::ordered().len());
        assert_eq!(analytics.category_count(Category::Health), 1);
        assert_eq!(analytics.category_count(Category::Culture), 0);
    }

    #[test]
    fn empty_store_lists_every_bucket_with_zero() {
        let analytics = WallAnalytics::from_snapshot(&PostStore::new().snapshot());
        assert_eq!(analytics.total, 0);
        assert!(analytics.category_breakdown.iter().all(|c| c.count == 0));
        assert_eq!(analytics.status_breakdown[0].label, "Approved");
    }
}
