use super::map_db_err;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::repository::CommentRepository;
use crate::domain::errors::DomainError;
use crate::domain::social::like::{self, LikeOutcome, LikeTally, LikerSet};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;

pub struct SqlxCommentRepository {
    pool: PgPool,
}

impl SqlxCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    author_id: i64,
    author_name: Option<String>,
    body: String,
    likes_count: i64,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self, likers: LikerSet) -> Comment {
        Comment {
            id: self.id,
            post_id: self.post_id,
            author_id: self.author_id,
            author_name: self.author_name,
            body: self.body,
            likers,
            like_count: self.likes_count,
            created_at: self.created_at,
        }
    }
}

const COMMENT_SELECT: &str = "SELECT c.id, c.post_id, c.author_id, \
                              u.name || ' ' || u.surname AS author_name, \
                              c.body, c.likes_count, c.created_at \
                              FROM comments c LEFT JOIN users u ON u.id = c.author_id";

impl SqlxCommentRepository {
    async fn load_likers(&self, comment_id: i64) -> Result<LikerSet, DomainError> {
        let ids: Vec<i64> =
            sqlx::query_scalar("SELECT account_id FROM comment_likes WHERE comment_id = $1")
                .bind(comment_id)
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_err)?;
        Ok(ids.into_iter().collect())
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<Comment, DomainError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO comments (post_id, author_id, body) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(comment.post_id)
        .bind(comment.author_id)
        .bind(&comment.body)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_err)?;

        let row = sqlx::query_as::<_, CommentRow>(&format!("{COMMENT_SELECT} WHERE c.id = $1"))
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_err)?;
        Ok(row.into_comment(LikerSet::new()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, DomainError> {
        let row = sqlx::query_as::<_, CommentRow>(&format!("{COMMENT_SELECT} WHERE c.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_err)?;

        match row {
            None => Ok(None),
            Some(row) => {
                let likers = self.load_likers(row.id).await?;
                Ok(Some(row.into_comment(likers)))
            }
        }
    }

    async fn list_for_post(&self, post_id: i64) -> Result<Vec<Comment>, DomainError> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "{COMMENT_SELECT} WHERE c.post_id = $1 ORDER BY c.created_at DESC"
        ))
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        let comment_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let memberships: Vec<(i64, i64)> = sqlx::query_as(
            "SELECT comment_id, account_id FROM comment_likes WHERE comment_id = ANY($1)",
        )
        .bind(&comment_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        let mut likers_by_comment: HashMap<i64, LikerSet> = HashMap::new();
        for (comment_id, account_id) in memberships {
            likers_by_comment
                .entry(comment_id)
                .or_default()
                .insert(account_id);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let likers = likers_by_comment.remove(&row.id).unwrap_or_default();
                row.into_comment(likers)
            })
            .collect())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment".to_string()));
        }
        Ok(())
    }

    async fn toggle_like(
        &self,
        comment_id: i64,
        account_id: i64,
    ) -> Result<LikeOutcome, DomainError> {
        let mut tx = self.pool.begin().await.map_err(map_db_err)?;

        let locked: Option<i64> =
            sqlx::query_scalar("SELECT id FROM comments WHERE id = $1 FOR UPDATE")
                .bind(comment_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_db_err)?;
        if locked.is_none() {
            return Err(DomainError::NotFound("comment".to_string()));
        }

        let likers: Vec<i64> =
            sqlx::query_scalar("SELECT account_id FROM comment_likes WHERE comment_id = $1")
                .bind(comment_id)
                .fetch_all(&mut *tx)
                .await
                .map_err(map_db_err)?;

        let mut tally = LikeTally::from_likers(likers);
        let outcome = like::toggle(&mut tally, account_id);

        if outcome.liked {
            sqlx::query("INSERT INTO comment_likes (comment_id, account_id) VALUES ($1, $2)")
                .bind(comment_id)
                .bind(account_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_err)?;
        } else {
            sqlx::query("DELETE FROM comment_likes WHERE comment_id = $1 AND account_id = $2")
                .bind(comment_id)
                .bind(account_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_err)?;
        }

        sqlx::query("UPDATE comments SET likes_count = $1 WHERE id = $2")
            .bind(outcome.like_count)
            .bind(comment_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_err)?;

        tx.commit().await.map_err(map_db_err)?;
        Ok(outcome)
    }
}
