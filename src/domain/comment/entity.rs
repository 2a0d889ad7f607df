use crate::domain::social::authorization::Authored;
use crate::domain::social::like::{Likeable, LikerSet};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A comment attached to exactly one post, authored by exactly one account.
///
/// `author_name` is denormalized from the users table when reading; it is
/// `None` only if the join found no matching account.
#[derive(Debug, Clone, Serialize, Default)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub author_name: Option<String>,
    pub body: String,
    pub likers: LikerSet,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}

impl Likeable for Comment {
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

impl Authored for Comment {
    fn author_id(&self) -> i64 {
        self.author_id
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: i64,
    pub author_id: i64,
    pub body: String,
}
