use chrono::{DateTime, Duration, Utc};

use super::domain::{Category, Post, PostId, PostStatus, PostType};

struct SeedPost {
    id: &'static str,
    post_type: PostType,
    content: &'static str,
    category: Category,
    status: PostStatus,
    age_ms: i64,
    likes: u32,
    author: &'static str,
}

const SEED: [SeedPost; 4] = [
    SeedPost {
        id: "4",
        post_type: PostType::Text,
        content: "হাসপাতালে গরিব রোগীদের জন্য বিনামূল্যে চিকিৎসার ব্যবস্থা চাই।",
        category: Category::Health,
        status: PostStatus::Pending,
        age_ms: 100_000,
        likes: 0,
        author: "অজ্ঞাত",
    },
    SeedPost {
        id: "3",
        post_type: PostType::Image,
        content: "https://picsum.photos/400/300?random=1",
        category: Category::Justice,
        status: PostStatus::Approved,
        age_ms: 2_000_000,
        likes: 200,
        author: "সচেতন নাগরিক",
    },
    SeedPost {
        id: "2",
        post_type: PostType::Text,
        content: "কৃষকদের জন্য ফসলের ন্যায্য মূল্য নিশ্চিত করতে হবে। মধ্যস্বত্বভোগীদের দৌরাত্ম্য কমাতে হবে।",
        category: Category::Agriculture,
        status: PostStatus::Approved,
        age_ms: 5_000_000,
        likes: 85,
        author: "রহিম মিয়া",
    },
    SeedPost {
        id: "1",
        post_type: PostType::Text,
        content: "শিক্ষা ব্যবস্থায় নৈতিকতা ও প্রযুক্তির সমন্বয় চাই। প্রতিটি গ্রামে মানসম্মত স্কুল নিশ্চিত করতে হবে।",
        category: Category::Education,
        status: PostStatus::Approved,
        age_ms: 10_000_000,
        likes: 120,
        author: "আব্দুল্লাহ",
    },
];

/// Sample wall content for demos, newest first, aged relative to `now`.
pub fn seed_posts(now: DateTime<Utc>) -> Vec<Post> {
    SEED.iter()
        .map(|seed| Post {
            id: PostId::from(seed.id),
            post_type: seed.post_type,
            content: seed.content.to_string(),
            category: seed.category,
            status: seed.status,
            timestamp: now - Duration::milliseconds(seed.age_ms),
            likes: seed.likes,
            author_name: Some(seed.author.to_string()),
        })
        .collect()
}
