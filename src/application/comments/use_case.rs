use super::dto::AddCommentRequest;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::repository::CommentRepository;
use crate::domain::errors::DomainError;
use crate::domain::post::repository::PostRepository;
use crate::domain::social::authorization::{Actor, AuthorizationGuard, MutatingOperation};
use std::sync::Arc;

const MAX_COMMENT_CHARS: usize = 500;

pub struct CommentUseCase {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
    guard: AuthorizationGuard,
}

impl CommentUseCase {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        posts: Arc<dyn PostRepository>,
        guard: AuthorizationGuard,
    ) -> Self {
        Self {
            comments,
            posts,
            guard,
        }
    }

    pub async fn add_comment(
        &self,
        actor: Actor,
        post_id: i64,
        request: AddCommentRequest,
    ) -> Result<Comment, DomainError> {
        let author_id = actor.require_authenticated()?;

        let body = request.body.trim().to_string();
        if body.is_empty() {
            return Err(DomainError::Validation(
                "comment cannot be empty".to_string(),
            ));
        }
        if body.chars().count() > MAX_COMMENT_CHARS {
            return Err(DomainError::Validation(format!(
                "comment must be {MAX_COMMENT_CHARS} characters or less"
            )));
        }

        if self.posts.find_by_id(post_id).await?.is_none() {
            return Err(DomainError::NotFound("post".to_string()));
        }

        let comment = self
            .comments
            .create(NewComment {
                post_id,
                author_id,
                body,
            })
            .await?;
        tracing::info!(comment_id = comment.id, post_id, author_id, "comment added");
        Ok(comment)
    }

    pub async fn list_comments(&self, post_id: i64) -> Result<Vec<Comment>, DomainError> {
        if self.posts.find_by_id(post_id).await?.is_none() {
            return Err(DomainError::NotFound("post".to_string()));
        }
        self.comments.list_for_post(post_id).await
    }

    pub async fn delete_comment(&self, actor: Actor, id: i64) -> Result<(), DomainError> {
        let comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("comment".to_string()))?;

        // The target is the comment, not its parent post: only the comment's
        // author or the super-admin may delete it.
        self.guard
            .require(actor, MutatingOperation::DeleteComment, &comment)?;

        self.comments.delete(id).await?;
        tracing::info!(comment_id = id, actor = ?actor.account_id(), "comment deleted");
        Ok(())
    }
}
