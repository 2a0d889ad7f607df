use super::entity::{Comment, NewComment};
use crate::domain::errors::DomainError;
use crate::domain::social::like::LikeOutcome;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, comment: NewComment) -> Result<Comment, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, DomainError>;
    async fn list_for_post(&self, post_id: i64) -> Result<Vec<Comment>, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
    /// Transactional read-modify-write of the liker set; implementations
    /// must serialize concurrent toggles on the same comment.
    async fn toggle_like(
        &self,
        comment_id: i64,
        account_id: i64,
    ) -> Result<LikeOutcome, DomainError>;
}
