use super::entity::{Account, NewAccount};
use crate::domain::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create(&self, account: NewAccount) -> Result<Account, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;
}
