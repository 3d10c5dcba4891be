use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::votes::{VoteIncrement, VoteOutcome};
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64>;

    /// Comments of one article in `comment_id` order.
    async fn list_page_for_article(
        &self,
        article_id: ArticleId,
        page: PageRequest,
    ) -> DomainResult<Vec<Comment>>;

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    async fn apply_votes(
        &self,
        id: CommentId,
        delta: VoteIncrement,
    ) -> DomainResult<Option<VoteOutcome<Comment>>>;

    async fn delete(&self, id: CommentId) -> DomainResult<bool>;
}
