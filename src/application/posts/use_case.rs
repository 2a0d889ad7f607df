use super::dto::{ListPostsRequest, PostContentRequest};
use crate::domain::errors::DomainError;
use crate::domain::post::entity::{NewPost, Post, PostContentUpdate, PostFilter, PostOrder};
use crate::domain::post::repository::PostRepository;
use crate::domain::shared::pagination::PaginationRequest;
use crate::domain::social::authorization::{Actor, AuthorizationGuard, MutatingOperation};
use chrono::Utc;
use std::sync::Arc;

pub struct PostUseCase {
    posts: Arc<dyn PostRepository>,
    guard: AuthorizationGuard,
    categories: Vec<String>,
}

impl PostUseCase {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        guard: AuthorizationGuard,
        categories: Vec<String>,
    ) -> Self {
        Self {
            posts,
            guard,
            categories,
        }
    }

    pub async fn create_post(
        &self,
        actor: Actor,
        request: PostContentRequest,
    ) -> Result<Post, DomainError> {
        let author_id = actor.require_authenticated()?;
        let content = self.validate_content(request)?;

        let post = self
            .posts
            .create(NewPost {
                author_id,
                title: content.title,
                subtitle: content.subtitle,
                body: content.body,
                category: content.category,
                img_url: content.img_url,
                date: Utc::now().format("%B %d, %Y").to_string(),
            })
            .await?;
        tracing::info!(post_id = post.id, author_id, "post created");
        Ok(post)
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("post".to_string()))
    }

    pub async fn list_posts(&self, request: ListPostsRequest) -> Result<Vec<Post>, DomainError> {
        let order = match request.sort.as_deref() {
            None | Some("newest") => PostOrder::Newest,
            Some("most_liked") => PostOrder::MostLiked,
            Some(other) => {
                return Err(DomainError::Validation(format!(
                    "unknown sort order: {other}"
                )));
            }
        };
        let page = PaginationRequest {
            limit: request.limit.unwrap_or(50),
            offset: request.offset.unwrap_or(0),
        }
        .sanitized();

        self.posts
            .list(
                PostFilter {
                    category: request.category,
                    order,
                },
                page,
            )
            .await
    }

    pub async fn edit_post(
        &self,
        actor: Actor,
        id: i64,
        request: PostContentRequest,
    ) -> Result<Post, DomainError> {
        let post = self.get_post(id).await?;
        self.guard
            .require(actor, MutatingOperation::EditPost, &post)?;
        let content = self.validate_content(request)?;

        let updated = self.posts.update_content(id, content).await?;
        tracing::info!(post_id = id, actor = ?actor.account_id(), "post edited");
        Ok(updated)
    }

    pub async fn delete_post(&self, actor: Actor, id: i64) -> Result<(), DomainError> {
        let post = self.get_post(id).await?;
        self.guard
            .require(actor, MutatingOperation::DeletePost, &post)?;

        // Comments attached to the post are left in place; there is no
        // cascade.
        self.posts.delete(id).await?;
        tracing::info!(post_id = id, actor = ?actor.account_id(), "post deleted");
        Ok(())
    }

    fn validate_content(
        &self,
        request: PostContentRequest,
    ) -> Result<PostContentUpdate, DomainError> {
        let title = request.title.trim().to_string();
        let subtitle = request.subtitle.trim().to_string();
        let body = request.body.trim().to_string();
        if title.is_empty() {
            return Err(DomainError::Validation("title is required".to_string()));
        }
        if title.chars().count() > 250 || subtitle.chars().count() > 250 {
            return Err(DomainError::Validation(
                "title and subtitle must be 250 characters or less".to_string(),
            ));
        }
        if subtitle.is_empty() {
            return Err(DomainError::Validation("subtitle is required".to_string()));
        }
        if body.is_empty() {
            return Err(DomainError::Validation("body is required".to_string()));
        }

        let category = match request.category.map(|c| c.trim().to_string()) {
            None => None,
            Some(c) if c.is_empty() => None,
            Some(c) => {
                if !self.categories.iter().any(|known| known == &c) {
                    return Err(DomainError::Validation(format!("unknown category: {c}")));
                }
                Some(c)
            }
        };

        Ok(PostContentUpdate {
            title,
            subtitle,
            body,
            category,
            img_url: request
                .img_url
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty()),
        })
    }
}
