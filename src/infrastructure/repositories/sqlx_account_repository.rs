use super::map_db_err;
use crate::domain::account::entity::{Account, NewAccount};
use crate::domain::account::repository::AccountRepository;
use crate::domain::errors::DomainError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct SqlxAccountRepository {
    pool: PgPool,
}

impl SqlxAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for SqlxAccountRepository {
    async fn create(&self, account: NewAccount) -> Result<Account, DomainError> {
        let row = sqlx::query_as::<_, Account>(
            "INSERT INTO users (name, surname, email, phone, password_hash)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, name, surname, email, phone, password_hash, created_at",
        )
        .bind(&account.name)
        .bind(&account.surname)
        .bind(&account.email)
        .bind(&account.phone)
        .bind(&account.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.code().as_deref() == Some("23505") {
                    return DomainError::Validation("email already registered".to_string());
                }
            }
            map_db_err(e)
        })?;
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, DomainError> {
        sqlx::query_as::<_, Account>(
            "SELECT id, name, surname, email, phone, password_hash, created_at
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        sqlx::query_as::<_, Account>(
            "SELECT id, name, surname, email, phone, password_hash, created_at
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }
}
