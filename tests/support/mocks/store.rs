// tests/support/mocks/store.rs
//! In-memory stand-in for the relational store. Mirrors the listing query:
//! equality filters, a left-joined comment count, the requested order with an
//! `article_id` tiebreak, then a LIMIT/OFFSET window.
use std::cmp::Ordering;
use std::ops::Range;
use std::sync::Mutex;

use async_trait::async_trait;
use news_aggregator::domain::{
    article::{
        Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSort, ArticleSummary,
        ArticleWithCommentCount, ArticleWriteRepository, NewArticle, SortColumn, SortOrder,
    },
    comment::{Comment, CommentId, CommentRepository, NewComment},
    errors::{DomainError, DomainResult},
    pagination::PageRequest,
    topic::{Topic, TopicRepository, TopicSlug},
    user::{User, UserRepository, Username},
    votes::{VoteIncrement, VoteOutcome},
};

/// Index range of `page` within `len` rows, i.e. LIMIT/OFFSET.
fn page_window(page: PageRequest, len: usize) -> Range<usize> {
    let start = usize::try_from(page.offset()).unwrap_or(usize::MAX).min(len);
    let end = start.saturating_add(page.limit() as usize).min(len);
    start..end
}

#[derive(Default)]
struct StoreState {
    topics: Vec<Topic>,
    users: Vec<User>,
    articles: Vec<Article>,
    comments: Vec<Comment>,
    next_article_id: i64,
    next_comment_id: i64,
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_topic(&self, topic: Topic) {
        self.state.lock().unwrap().topics.push(topic);
    }

    pub fn add_user(&self, user: User) {
        self.state.lock().unwrap().users.push(user);
    }

    pub fn add_article(&self, article: Article) {
        let mut state = self.state.lock().unwrap();
        state.next_article_id = state.next_article_id.max(article.id.0);
        state.articles.push(article);
    }

    pub fn add_comment(&self, comment: Comment) {
        let mut state = self.state.lock().unwrap();
        state.next_comment_id = state.next_comment_id.max(comment.id.0);
        state.comments.push(comment);
    }

    pub fn article_votes(&self, id: i64) -> Option<i32> {
        let state = self.state.lock().unwrap();
        state
            .articles
            .iter()
            .find(|a| a.id.0 == id)
            .map(|a| a.votes)
    }

    pub fn comments_on(&self, article_id: i64) -> usize {
        let state = self.state.lock().unwrap();
        state
            .comments
            .iter()
            .filter(|c| c.article_id.0 == article_id)
            .count()
    }

    pub fn comment_total(&self) -> usize {
        self.state.lock().unwrap().comments.len()
    }
}

impl StoreState {
    fn comment_count(&self, id: ArticleId) -> i64 {
        self.comments.iter().filter(|c| c.article_id == id).count() as i64
    }

    fn matching(&self, filter: &ArticleFilter) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| filter.topic.as_ref().is_none_or(|t| &a.topic == t))
            .filter(|a| filter.author.as_ref().is_none_or(|u| &a.author == u))
            .collect()
    }
}

fn summarize(article: &Article, comment_count: i64) -> ArticleSummary {
    ArticleSummary {
        id: article.id,
        title: article.title.clone(),
        topic: article.topic.clone(),
        author: article.author.clone(),
        created_at: article.created_at,
        votes: article.votes,
        comment_count,
    }
}

fn compare(a: &ArticleSummary, b: &ArticleSummary, column: SortColumn) -> Ordering {
    let primary = match column {
        SortColumn::ArticleId => a.id.cmp(&b.id),
        SortColumn::Title => a.title.as_str().cmp(b.title.as_str()),
        SortColumn::Topic => a.topic.as_str().cmp(b.topic.as_str()),
        SortColumn::Author => a.author.as_str().cmp(b.author.as_str()),
        SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        SortColumn::Votes => a.votes.cmp(&b.votes),
        SortColumn::CommentCount => a.comment_count.cmp(&b.comment_count),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

/* -------------------------------- ArticleReadRepository -------------------------------- */

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleWithCommentCount>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .find(|a| a.id == id)
            .map(|a| ArticleWithCommentCount {
                article: a.clone(),
                comment_count: state.comment_count(id),
            }))
    }

    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        Ok(self.state.lock().unwrap().articles.iter().any(|a| a.id == id))
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        Ok(self.state.lock().unwrap().matching(filter).len() as u64)
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        sort: ArticleSort,
        page: PageRequest,
    ) -> DomainResult<Vec<ArticleSummary>> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<ArticleSummary> = state
            .matching(filter)
            .into_iter()
            .map(|a| summarize(a, state.comment_count(a.id)))
            .collect();

        rows.sort_by(|a, b| {
            let ordering = compare(a, b, sort.column);
            match sort.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let window = page_window(page, rows.len());
        Ok(rows.drain(window).collect())
    }
}

/* -------------------------------- ArticleWriteRepository -------------------------------- */

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if !state.topics.iter().any(|t| t.slug == article.topic) {
            return Err(DomainError::NotFound(format!("No such topic: {}", article.topic)));
        }
        if !state.users.iter().any(|u| u.username == article.author) {
            return Err(DomainError::NotFound(format!("No such author: {}", article.author)));
        }

        state.next_article_id += 1;
        let created = Article {
            id: ArticleId::new(state.next_article_id)?,
            title: article.title,
            topic: article.topic,
            author: article.author,
            body: article.body,
            created_at: article.created_at,
            votes: 0,
        };
        state.articles.push(created.clone());
        Ok(created)
    }

    async fn apply_votes(
        &self,
        id: ArticleId,
        delta: VoteIncrement,
    ) -> DomainResult<Option<VoteOutcome<Article>>> {
        let mut state = self.state.lock().unwrap();
        let Some(article) = state.articles.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        Ok(Some(match delta.apply_to(article.votes) {
            Ok(votes) => {
                article.votes = votes;
                VoteOutcome::Applied(article.clone())
            }
            Err(rejection) => VoteOutcome::Rejected(rejection),
        }))
    }

    async fn delete_with_comments(&self, id: ArticleId) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        if !state.articles.iter().any(|a| a.id == id) {
            return Ok(false);
        }
        state.comments.retain(|c| c.article_id != id);
        state.articles.retain(|a| a.id != id);
        Ok(true)
    }
}

/* -------------------------------- CommentRepository -------------------------------- */

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        Ok(self.state.lock().unwrap().comment_count(article_id) as u64)
    }

    async fn list_page_for_article(
        &self,
        article_id: ArticleId,
        page: PageRequest,
    ) -> DomainResult<Vec<Comment>> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<Comment> = state
            .comments
            .iter()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect();
        rows.sort_by_key(|c| c.id);
        let window = page_window(page, rows.len());
        Ok(rows.drain(window).collect())
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        if !state.articles.iter().any(|a| a.id == comment.article_id) {
            return Err(DomainError::NotFound(format!(
                "No such article_id: {}",
                comment.article_id
            )));
        }
        if !state.users.iter().any(|u| u.username == comment.author) {
            return Err(DomainError::NotFound(format!("No such author: {}", comment.author)));
        }

        state.next_comment_id += 1;
        let created = Comment {
            id: CommentId::new(state.next_comment_id)?,
            article_id: comment.article_id,
            author: comment.author,
            body: comment.body,
            votes: 0,
            created_at: comment.created_at,
        };
        state.comments.push(created.clone());
        Ok(created)
    }

    async fn apply_votes(
        &self,
        id: CommentId,
        delta: VoteIncrement,
    ) -> DomainResult<Option<VoteOutcome<Comment>>> {
        let mut state = self.state.lock().unwrap();
        let Some(comment) = state.comments.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        Ok(Some(match delta.apply_to(comment.votes) {
            Ok(votes) => {
                comment.votes = votes;
                VoteOutcome::Applied(comment.clone())
            }
            Err(rejection) => VoteOutcome::Rejected(rejection),
        }))
    }

    async fn delete(&self, id: CommentId) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.comments.len();
        state.comments.retain(|c| c.id != id);
        Ok(state.comments.len() < before)
    }
}

/* -------------------------------- TopicRepository -------------------------------- */

#[async_trait]
impl TopicRepository for InMemoryStore {
    async fn list_all(&self) -> DomainResult<Vec<Topic>> {
        Ok(self.state.lock().unwrap().topics.clone())
    }

    async fn exists(&self, slug: &TopicSlug) -> DomainResult<bool> {
        Ok(self.state.lock().unwrap().topics.iter().any(|t| &t.slug == slug))
    }

    async fn insert(&self, topic: Topic) -> DomainResult<Topic> {
        let mut state = self.state.lock().unwrap();
        if state.topics.iter().any(|t| t.slug == topic.slug) {
            return Err(DomainError::Conflict(format!(
                "Key (slug)=({}) already exists.",
                topic.slug
            )));
        }
        state.topics.push(topic.clone());
        Ok(topic)
    }
}

/* -------------------------------- UserRepository -------------------------------- */

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list_all(&self) -> DomainResult<Vec<User>> {
        Ok(self.state.lock().unwrap().users.clone())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| &u.username == username)
            .cloned())
    }

    async fn exists(&self, username: &Username) -> DomainResult<bool> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .users
            .iter()
            .any(|u| &u.username == username))
    }
}
