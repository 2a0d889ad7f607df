use serde::Serialize;
use std::collections::BTreeSet;

/// The set of account ids that currently like a post or comment.
///
/// Persisted as membership rows, never as an encoded string, so the
/// no-duplicates invariant is structural.
pub type LikerSet = BTreeSet<i64>;

/// Anything that carries a liker set plus its denormalized count.
///
/// Implemented by [`Post`](crate::domain::post::entity::Post),
/// [`Comment`](crate::domain::comment::entity::Comment), and the tally the
/// repositories reconstruct inside a toggle transaction.
pub trait Likeable {
    fn likers(&self) -> &LikerSet;
    fn likers_mut(&mut self) -> &mut LikerSet;
    fn like_count(&self) -> i64;
    fn set_like_count(&mut self, count: i64);
}

/// Result of one toggle: whether the actor now likes the entity, and the
/// recomputed count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikeOutcome {
    pub liked: bool,
    pub like_count: i64,
}

/// Flip `actor_id`'s membership in the entity's liker set and recompute the
/// like count.
///
/// A strict toggle: there is no separate like/unlike entry point, and
/// applying it twice with the same actor restores the original state. After
/// the call `like_count == likers.len()` always holds; no other field of the
/// entity is touched.
///
/// The caller guarantees `actor_id` refers to an existing, authenticated
/// account. Callers that persist the result must run the surrounding
/// read-modify-write inside one transaction per entity (see the sqlx
/// repositories, which lock the parent row).
pub fn toggle<L: Likeable + ?Sized>(entity: &mut L, actor_id: i64) -> LikeOutcome {
    let liked = if entity.likers().contains(&actor_id) {
        entity.likers_mut().remove(&actor_id);
        false
    } else {
        entity.likers_mut().insert(actor_id);
        true
    };
    let like_count = entity.likers().len() as i64;
    entity.set_like_count(like_count);
    LikeOutcome { liked, like_count }
}

/// Standalone liker-set/count pair, used by repositories to apply the toggle
/// to state loaded under a row lock without materializing the full entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikeTally {
    pub likers: LikerSet,
    pub like_count: i64,
}

impl LikeTally {
    pub fn from_likers(likers: impl IntoIterator<Item = i64>) -> Self {
        let likers: LikerSet = likers.into_iter().collect();
        let like_count = likers.len() as i64;
        Self { likers, like_count }
    }
}

impl Likeable for LikeTally {
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
