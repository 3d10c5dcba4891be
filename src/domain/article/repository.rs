use crate::domain::article::entity::{
    Article, ArticleSummary, ArticleWithCommentCount, NewArticle,
};
use crate::domain::article::listing::{ArticleFilter, ArticleSort};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::votes::{VoteIncrement, VoteOutcome};
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Adds `delta` in a single guarded update. `None` when the article does not exist.
    async fn apply_votes(
        &self,
        id: ArticleId,
        delta: VoteIncrement,
    ) -> DomainResult<Option<VoteOutcome<Article>>>;

    /// Removes the article and all of its comments atomically. Returns
    /// `false` when there was no such article.
    async fn delete_with_comments(&self, id: ArticleId) -> DomainResult<bool>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleWithCommentCount>>;

    async fn exists(&self, id: ArticleId) -> DomainResult<bool>;

    /// Size of the filtered, unpaginated result set.
    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64>;

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        sort: ArticleSort,
        page: PageRequest,
    ) -> DomainResult<Vec<ArticleSummary>>;
}
