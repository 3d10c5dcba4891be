use crate::domain::errors::DomainResult;
use crate::domain::user::{entity::User, value_objects::Username};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_all(&self) -> DomainResult<Vec<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn exists(&self, username: &Username) -> DomainResult<bool>;
}
