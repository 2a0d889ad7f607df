use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A registered user. Accounts own the posts and comments they author;
/// deleting an account is not part of the domain.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    /// Opaque bcrypt hash, never serialized to clients.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Registration input; the password arrives already hashed.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
}
