// src/infrastructure/repositories/postgres_article.rs
use super::{VOTE_ATTEMPTS, guarded_vote_sql, map_sqlx};
use crate::domain::article::{
    Article, ArticleBody, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSort,
    ArticleSummary, ArticleTitle, ArticleWithCommentCount, ArticleWriteRepository, NewArticle,
    SortColumn,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::topic::TopicSlug;
use crate::domain::user::Username;
use crate::domain::votes::{VoteIncrement, VoteOutcome};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::debug;

const ARTICLE_COLUMNS: &str = "article_id, title, topic, author, body, created_at, votes";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    article_id: i64,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.article_id)?,
            title: ArticleTitle::new(row.title)?,
            topic: TopicSlug::new(row.topic)?,
            author: Username::new(row.author)?,
            body: ArticleBody::new(row.body)?,
            created_at: row.created_at,
            votes: row.votes,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleWithCountRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    comment_count: i64,
}

#[derive(Debug, FromRow)]
struct ArticleSummaryRow {
    article_id: i64,
    title: String,
    topic: String,
    author: String,
    created_at: DateTime<Utc>,
    votes: i32,
    comment_count: i64,
}

impl TryFrom<ArticleSummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: ArticleSummaryRow) -> Result<Self, Self::Error> {
        Ok(ArticleSummary {
            id: ArticleId::new(row.article_id)?,
            title: ArticleTitle::new(row.title)?,
            topic: TopicSlug::new(row.topic)?,
            author: Username::new(row.author)?,
            created_at: row.created_at,
            votes: row.votes,
            comment_count: row.comment_count,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            topic,
            author,
            body,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, topic, author, body, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(topic.as_str())
        .bind(author.as_str())
        .bind(body.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn apply_votes(
        &self,
        id: ArticleId,
        delta: VoteIncrement,
    ) -> DomainResult<Option<VoteOutcome<Article>>> {
        let update = guarded_vote_sql("articles", "article_id", ARTICLE_COLUMNS);

        for _ in 0..VOTE_ATTEMPTS {
            let updated = sqlx::query_as::<_, ArticleRow>(&update)
                .bind(i64::from(id))
                .bind(delta.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?;

            if let Some(row) = updated {
                return Ok(Some(VoteOutcome::Applied(Article::try_from(row)?)));
            }

            let current =
                sqlx::query_scalar::<_, i32>("SELECT votes FROM articles WHERE article_id = $1")
                    .bind(i64::from(id))
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(map_sqlx)?;
            let Some(current_votes) = current else {
                return Ok(None);
            };

            // A vote in between can bring the total back into range.
            if let Err(rejection) = delta.apply_to(current_votes) {
                return Ok(Some(VoteOutcome::Rejected(rejection)));
            }
        }

        Err(DomainError::Persistence(format!(
            "votes of article {id} kept changing during update"
        )))
    }

    async fn delete_with_comments(&self, id: ArticleId) -> DomainResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let removed_comments = sqlx::query("DELETE FROM comments WHERE article_id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected();

        let removed = sqlx::query("DELETE FROM articles WHERE article_id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected();

        if removed == 0 {
            tx.rollback().await.map_err(map_sqlx)?;
            return Ok(false);
        }

        tx.commit().await.map_err(map_sqlx)?;
        debug!(article_id = %id, removed_comments, "article removed with its comments");
        Ok(true)
    }
}

impl PostgresArticleReadRepository {
    fn push_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ArticleFilter) {
        let mut separator = " WHERE ";
        if let Some(topic) = &filter.topic {
            builder.push(separator);
            builder.push("articles.topic = ");
            builder.push_bind(topic.as_str());
            separator = " AND ";
        }
        if let Some(author) = &filter.author {
            builder.push(separator);
            builder.push("articles.author = ");
            builder.push_bind(author.as_str());
        }
    }

    /// Sort expressions come from a closed set; the aggregate is ordered by
    /// its expression rather than an alias.
    fn sort_expression(column: SortColumn) -> &'static str {
        match column {
            SortColumn::ArticleId => "articles.article_id",
            SortColumn::Title => "articles.title",
            SortColumn::Topic => "articles.topic",
            SortColumn::Author => "articles.author",
            SortColumn::CreatedAt => "articles.created_at",
            SortColumn::Votes => "articles.votes",
            SortColumn::CommentCount => "COUNT(comments.comment_id)",
        }
    }

    fn count_query(filter: &ArticleFilter) -> QueryBuilder<'_, Postgres> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM articles");
        Self::push_filter(&mut builder, filter);
        builder
    }

    fn page_query(
        filter: &ArticleFilter,
        sort: ArticleSort,
        page: PageRequest,
    ) -> QueryBuilder<'_, Postgres> {
        let mut builder = QueryBuilder::new(
            "SELECT articles.article_id, articles.title, articles.topic, articles.author, \
             articles.created_at, articles.votes, COUNT(comments.comment_id) AS comment_count \
             FROM articles LEFT JOIN comments ON comments.article_id = articles.article_id",
        );
        Self::push_filter(&mut builder, filter);
        builder.push(" GROUP BY articles.article_id");

        let direction = sort.order.as_sql();
        builder.push(" ORDER BY ");
        builder.push(Self::sort_expression(sort.column));
        builder.push(" ");
        builder.push(direction);
        if sort.column != SortColumn::ArticleId {
            builder.push(", articles.article_id ");
            builder.push(direction);
        }

        builder.push(" LIMIT ");
        builder.push_bind(i64::from(page.limit()));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));
        builder
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleWithCommentCount>> {
        let row = sqlx::query_as::<_, ArticleWithCountRow>(
            "SELECT articles.article_id, articles.title, articles.topic, articles.author,
                    articles.body, articles.created_at, articles.votes,
                    COUNT(comments.comment_id) AS comment_count
             FROM articles LEFT JOIN comments ON comments.article_id = articles.article_id
             WHERE articles.article_id = $1
             GROUP BY articles.article_id",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(|row| {
            Ok(ArticleWithCommentCount {
                article: Article::try_from(row.article)?,
                comment_count: row.comment_count,
            })
        })
        .transpose()
    }

    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM articles WHERE article_id = $1)")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let total = Self::count_query(filter)
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        sort: ArticleSort,
        page: PageRequest,
    ) -> DomainResult<Vec<ArticleSummary>> {
        let rows = Self::page_query(filter, sort, page)
            .build_query_as::<ArticleSummaryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleSummary::try_from).collect()
    }
}
