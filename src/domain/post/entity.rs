use crate::domain::social::authorization::Authored;
use crate::domain::social::like::{Likeable, LikerSet};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A blog post authored by exactly one account.
///
/// `likers` and `like_count` are kept consistent by the like toggle:
/// `like_count` always equals `likers.len()`. `date` is the opaque display
/// string shown alongside the post, distinct from the stored timestamps.
#[derive(Debug, Clone, Serialize, Default)]
pub struct Post {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub subtitle: String,
    pub body: String,
    /// One of the configured category names, or unset.
    pub category: Option<String>,
    pub img_url: Option<String>,
    pub date: String,
    pub likers: LikerSet,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Likeable for Post {
    fn likers(&self) -> &LikerSet {
        &self.likers
    }

    fn likers_mut(&mut self) -> &mut LikerSet {
        &mut self.likers
    }

    fn like_count(&self) -> i64 {
        self.like_count
    }

    fn set_like_count(&mut self, count: i64) {
        self.like_count = count;
    }
}

impl Authored for Post {
    fn author_id(&self) -> i64 {
        self.author_id
    }
}

/// Fields supplied when authoring a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: i64,
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub category: Option<String>,
    pub img_url: Option<String>,
    pub date: String,
}

/// Content fields an edit may change. Author, date, and like state are
/// never touched by an edit.
#[derive(Debug, Clone)]
pub struct PostContentUpdate {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub category: Option<String>,
    pub img_url: Option<String>,
}

/// How a post listing is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostOrder {
    #[default]
    Newest,
    MostLiked,
}

/// Listing filter: optional category plus ordering.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub category: Option<String>,
    pub order: PostOrder,
}
