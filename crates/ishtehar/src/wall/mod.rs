//! Post lifecycle for the public-opinion wall: submission, moderation, the
//! public view, and dashboard analytics over one owned store.

pub mod analytics;
pub mod domain;
pub mod moderation;
pub mod public;
pub mod router;
mod seed;
pub mod service;
pub mod store;
pub mod submission;

pub use analytics::{CategoryCount, StatusCount, WallAnalytics};
pub use domain::{
    Category, ModerationDecision, Post, PostId, PostStatus, PostType, UnknownVariant,
};
pub use moderation::{BanConfirmation, BanOutcome};
pub use public::{public_wall, Selection, WallFilter};
pub use router::wall_router;
pub use seed::seed_posts;
pub use service::WallService;
pub use store::{PostSnapshot, PostStore};
pub use submission::{Submission, SubmissionError};
