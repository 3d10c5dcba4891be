// tests/support/mocks/failing.rs
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use news_aggregator::domain::{
    article::{
        ArticleFilter, ArticleId, ArticleReadRepository, ArticleSort, ArticleSummary,
        ArticleWithCommentCount,
    },
    errors::{DomainError, DomainResult},
    pagination::PageRequest,
    topic::{Topic, TopicRepository, TopicSlug},
};

/* -------------------------------- ArticleReadRepository -------------------------------- */

/// Read side whose store is unreachable.
pub struct FailingArticleRead;

fn unreachable_store<T>() -> DomainResult<T> {
    Err(DomainError::Persistence(
        "connection refused: postgres://10.0.0.1:5432".into(),
    ))
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRead {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<ArticleWithCommentCount>> {
        unreachable_store()
    }

    async fn exists(&self, _id: ArticleId) -> DomainResult<bool> {
        unreachable_store()
    }

    async fn count(&self, _filter: &ArticleFilter) -> DomainResult<u64> {
        unreachable_store()
    }

    async fn list_page(
        &self,
        _filter: &ArticleFilter,
        _sort: ArticleSort,
        _page: PageRequest,
    ) -> DomainResult<Vec<ArticleSummary>> {
        unreachable_store()
    }
}

/* -------------------------------- TopicRepository -------------------------------- */

/// Delegates to another topic repository and counts existence lookups.
pub struct CountingTopicRepo {
    inner: Arc<dyn TopicRepository>,
    lookups: AtomicUsize,
}

impl CountingTopicRepo {
    pub fn new(inner: Arc<dyn TopicRepository>) -> Self {
        Self {
            inner,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TopicRepository for CountingTopicRepo {
    async fn list_all(&self) -> DomainResult<Vec<Topic>> {
        self.inner.list_all().await
    }

    async fn exists(&self, slug: &TopicSlug) -> DomainResult<bool> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.exists(slug).await
    }

    async fn insert(&self, topic: Topic) -> DomainResult<Topic> {
        self.inner.insert(topic).await
    }
}
