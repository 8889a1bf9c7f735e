use std::str::FromStr;

use super::domain::{Category, Post, PostStatus, PostType, UnknownVariant};
use super::store::PostSnapshot;

/// Either the `ALL` sentinel or one concrete value to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == value,
        }
    }
}

impl<T> Selection<T>
where
    T: FromStr<Err = UnknownVariant>,
{
    /// Parses a query value; absent, blank or `ALL` mean no narrowing.
    pub fn parse(raw: Option<&str>) -> Result<Self, UnknownVariant> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::All),
            Some(value) if value.eq_ignore_ascii_case("all") => Ok(Self::All),
            Some(value) => value.parse().map(Self::Only),
        }
    }
}

/// Filters chosen by a visitor of the public wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallFilter {
    pub category: Selection<Category>,
    pub post_type: Selection<PostType>,
}

impl WallFilter {
    pub fn category(mut self, category: Category) -> Self {
        self.category = Selection::Only(category);
        self
    }

    pub fn post_type(mut self, post_type: PostType) -> Self {
        self.post_type = Selection::Only(post_type);
        self
    }

    pub fn admits(&self, post: &Post) -> bool {
        post.status == PostStatus::Approved
            && self.category.matches(&post.category)
            && self.post_type.matches(&post.post_type)
    }
}

/// Approved posts visible under `filter`, newest first.
pub fn public_wall(snapshot: &PostSnapshot, filter: &WallFilter) -> Vec<Post> {
    snapshot
        .iter()
        .filter(|post| filter.admits(post))
        .cloned()
        .collect()
}
