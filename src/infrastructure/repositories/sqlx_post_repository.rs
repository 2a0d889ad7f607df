use super::map_db_err;
use crate::domain::errors::DomainError;
use crate::domain::post::entity::{NewPost, Post, PostContentUpdate, PostFilter, PostOrder};
use crate::domain::post::repository::PostRepository;
use crate::domain::shared::pagination::PaginationRequest;
use crate::domain::social::like::{self, LikeOutcome, LikeTally, LikerSet};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;

pub struct SqlxPostRepository {
    pool: PgPool,
}

impl SqlxPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    author_id: i64,
    title: String,
    subtitle: String,
    body: String,
    category: Option<String>,
    img_url: Option<String>,
    date: String,
    likes_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self, likers: LikerSet) -> Post {
        Post {
            id: self.id,
            author_id: self.author_id,
            title: self.title,
            subtitle: self.subtitle,
            body: self.body,
            category: self.category,
            img_url: self.img_url,
            date: self.date,
            likers,
            like_count: self.likes_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

const POST_COLUMNS: &str = "id, author_id, title, subtitle, body, category, img_url, date, \
                            likes_count, created_at, updated_at";

impl SqlxPostRepository {
    async fn load_likers(&self, post_id: i64) -> Result<LikerSet, DomainError> {
        let ids: Vec<i64> =
            sqlx::query_scalar("SELECT account_id FROM post_likes WHERE post_id = $1")
                .bind(post_id)
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_err)?;
        Ok(ids.into_iter().collect())
    }
}

#[async_trait]
impl PostRepository for SqlxPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (author_id, title, subtitle, body, category, img_url, date)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(post.author_id)
        .bind(&post.title)
        .bind(&post.subtitle)
        .bind(&post.body)
        .bind(&post.category)
        .bind(&post.img_url)
        .bind(&post.date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_err)?;
        Ok(row.into_post(LikerSet::new()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?;

        match row {
            None => Ok(None),
            Some(row) => {
                let likers = self.load_likers(row.id).await?;
                Ok(Some(row.into_post(likers)))
            }
        }
    }

    async fn list(
        &self,
        filter: PostFilter,
        page: PaginationRequest,
    ) -> Result<Vec<Post>, DomainError> {
        let order = match filter.order {
            PostOrder::Newest => "created_at DESC",
            PostOrder::MostLiked => "likes_count DESC, created_at DESC",
        };

        let rows = if let Some(category) = &filter.category {
            sqlx::query_as::<_, PostRow>(&format!(
                "SELECT {POST_COLUMNS} FROM posts WHERE category = $1
                 ORDER BY {order} LIMIT $2 OFFSET $3"
            ))
            .bind(category)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, PostRow>(&format!(
                "SELECT {POST_COLUMNS} FROM posts ORDER BY {order} LIMIT $1 OFFSET $2"
            ))
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(&self.pool)
            .await
        }
        .map_err(map_db_err)?;

        // One membership query for the whole page instead of one per post.
        let post_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let memberships: Vec<(i64, i64)> = sqlx::query_as(
            "SELECT post_id, account_id FROM post_likes WHERE post_id = ANY($1)",
        )
        .bind(&post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        let mut likers_by_post: HashMap<i64, LikerSet> = HashMap::new();
        for (post_id, account_id) in memberships {
            likers_by_post.entry(post_id).or_default().insert(account_id);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let likers = likers_by_post.remove(&row.id).unwrap_or_default();
                row.into_post(likers)
            })
            .collect())
    }

    async fn update_content(
        &self,
        id: i64,
        update: PostContentUpdate,
    ) -> Result<Post, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "UPDATE posts
             SET title = $1, subtitle = $2, body = $3, category = $4, img_url = $5,
                 updated_at = NOW()
             WHERE id = $6
             RETURNING {POST_COLUMNS}"
        ))
        .bind(&update.title)
        .bind(&update.subtitle)
        .bind(&update.body)
        .bind(&update.category)
        .bind(&update.img_url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| DomainError::NotFound("post".to_string()))?;

        let likers = self.load_likers(id).await?;
        Ok(row.into_post(likers))
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post".to_string()));
        }
        Ok(())
    }

    async fn toggle_like(
        &self,
        post_id: i64,
        account_id: i64,
    ) -> Result<LikeOutcome, DomainError> {
        let mut tx = self.pool.begin().await.map_err(map_db_err)?;

        // Lock the parent row so concurrent toggles on the same post
        // serialize; the membership read below is then stable.
        let locked: Option<i64> = sqlx::query_scalar("SELECT id FROM posts WHERE id = $1 FOR UPDATE")
            .bind(post_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_err)?;
        if locked.is_none() {
            return Err(DomainError::NotFound("post".to_string()));
        }

        let likers: Vec<i64> =
            sqlx::query_scalar("SELECT account_id FROM post_likes WHERE post_id = $1")
                .bind(post_id)
                .fetch_all(&mut *tx)
                .await
                .map_err(map_db_err)?;

        let mut tally = LikeTally::from_likers(likers);
        let outcome = like::toggle(&mut tally, account_id);

        if outcome.liked {
            sqlx::query("INSERT INTO post_likes (post_id, account_id) VALUES ($1, $2)")
                .bind(post_id)
                .bind(account_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_err)?;
        } else {
            sqlx::query("DELETE FROM post_likes WHERE post_id = $1 AND account_id = $2")
                .bind(post_id)
                .bind(account_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_err)?;
        }

        sqlx::query("UPDATE posts SET likes_count = $1 WHERE id = $2")
            .bind(outcome.like_count)
            .bind(post_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_err)?;

        tx.commit().await.map_err(map_db_err)?;
        Ok(outcome)
    }
}
