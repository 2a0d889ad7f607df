use super::entity::{NewPost, Post, PostContentUpdate, PostFilter};
use crate::domain::errors::DomainError;
use crate::domain::shared::pagination::PaginationRequest;
use crate::domain::social::like::LikeOutcome;
use async_trait::async_trait;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: NewPost) -> Result<Post, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError>;
    async fn list(
        &self,
        filter: PostFilter,
        page: PaginationRequest,
    ) -> Result<Vec<Post>, DomainError>;
    async fn update_content(
        &self,
        id: i64,
        update: PostContentUpdate,
    ) -> Result<Post, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
    /// Transactional read-modify-write of the liker set; implementations
    /// must serialize concurrent toggles on the same post.
    async fn toggle_like(&self, post_id: i64, account_id: i64)
    -> Result<LikeOutcome, DomainError>;
}
