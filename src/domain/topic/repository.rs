use crate::domain::errors::DomainResult;
use crate::domain::topic::{entity::Topic, value_objects::TopicSlug};
use async_trait::async_trait;

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn list_all(&self) -> DomainResult<Vec<Topic>>;

    async fn exists(&self, slug: &TopicSlug) -> DomainResult<bool>;

    /// Fails with `DomainError::Conflict` when the slug is already taken.
    async fn insert(&self, topic: Topic) -> DomainResult<Topic>;
}
