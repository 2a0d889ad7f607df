use crate::domain::comment::repository::CommentRepository;
use crate::domain::errors::DomainError;
use crate::domain::post::repository::PostRepository;
use crate::domain::social::authorization::Actor;
use crate::domain::social::like::LikeOutcome;
use std::sync::Arc;

/// Like/unlike for posts and comments. Any authenticated actor may toggle
/// any likeable entity, including their own; ownership is never consulted.
pub struct SocialUseCase {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl SocialUseCase {
    pub fn new(posts: Arc<dyn PostRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { posts, comments }
    }

    pub async fn toggle_post_like(
        &self,
        actor: Actor,
        post_id: i64,
    ) -> Result<LikeOutcome, DomainError> {
        let account_id = actor.require_authenticated()?;
        let outcome = self.posts.toggle_like(post_id, account_id).await?;
        tracing::debug!(post_id, account_id, liked = outcome.liked, "post like toggled");
        Ok(outcome)
    }

    pub async fn toggle_comment_like(
        &self,
        actor: Actor,
        comment_id: i64,
    ) -> Result<LikeOutcome, DomainError> {
        let account_id = actor.require_authenticated()?;
        let outcome = self.comments.toggle_like(comment_id, account_id).await?;
        tracing::debug!(
            comment_id,
            account_id,
            liked = outcome.liked,
            "comment like toggled"
        );
        Ok(outcome)
    }
}
