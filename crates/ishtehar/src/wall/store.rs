use std::ops::Deref;
use std::sync::Arc;

use super::domain::{Post, PostId};

/// Immutable view of the store at one point in time.
///
/// Snapshots share storage with the store until the next mutation, after which
/// the store moves on to a fresh copy and the snapshot keeps the old version.
#[derive(Debug, Clone, Default)]
pub struct PostSnapshot {
    posts: Arc<Vec<Post>>,
}

impl PostSnapshot {
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn to_vec(&self) -> Vec<Post> {
        self.posts.as_ref().clone()
    }
}

impl Deref for PostSnapshot {
    type Target = [Post];

    fn deref(&self) -> &Self::Target {
        &self.posts
    }
}

/// Ordered, newest-first collection of posts; the single source of truth for
/// the wall.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Arc<Vec<Post>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from posts already in newest-first order.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Arc::new(posts),
        }
    }

    pub fn snapshot(&self) -> PostSnapshot {
        PostSnapshot {
            posts: Arc::clone(&self.posts),
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|post| &post.id == id)
    }

    /// Places a post at the newest end of the store.
    pub fn prepend(&mut self, post: Post) {
        Arc::make_mut(&mut self.posts).insert(0, post);
    }

    /// Applies `update` to the post with the given id. Returns `false` without
    /// touching the store when no such post exists.
    pub fn update_by_id<F>(&mut self, id: &PostId, update: F) -> bool
    where
        F: FnOnce(&mut Post),
    {
        let Some(index) = self.posts.iter().position(|post| &post.id == id) else {
            return false;
        };

        let posts = Arc::make_mut(&mut self.posts);
        update(&mut posts[index]);
        true
    }

    /// Removes every post matching `predicate`, returning how many were dropped.
    pub fn remove_where<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&Post) -> bool,
    {
        if !self.posts.iter().any(&mut predicate) {
            return 0;
        }

        let posts = Arc::make_mut(&mut self.posts);
        let before = posts.len();
        posts.retain(|post| !predicate(post));
        before - posts.len()
    }

    /// Registers one like on the post. Unknown ids are ignored.
    pub fn like(&mut self, id: &PostId) -> bool {
        self.update_by_id(id, |post| post.likes = post.likes.saturating_add(1))
    }
}
