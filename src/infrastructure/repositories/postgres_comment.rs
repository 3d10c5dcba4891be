// src/infrastructure/repositories/postgres_comment.rs
use super::{VOTE_ATTEMPTS, guarded_vote_sql, map_sqlx};
use crate::domain::article::ArticleId;
use crate::domain::comment::{Comment, CommentBody, CommentId, CommentRepository, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::user::Username;
use crate::domain::votes::{VoteIncrement, VoteOutcome};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COMMENT_COLUMNS: &str = "comment_id, article_id, author, body, votes, created_at";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    comment_id: i64,
    article_id: i64,
    author: String,
    body: String,
    votes: i32,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.comment_id)?,
            article_id: ArticleId::new(row.article_id)?,
            author: Username::new(row.author)?,
            body: CommentBody::new(row.body)?,
            votes: row.votes,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE article_id = $1")
            .bind(i64::from(article_id))
            .fetch_one(&self.pool)
            .await
            .map(|count| u64::try_from(count).unwrap_or_default())
            .map_err(map_sqlx)
    }

    async fn list_page_for_article(
        &self,
        article_id: ArticleId,
        page: PageRequest,
    ) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE article_id = $1
             ORDER BY comment_id ASC
             LIMIT $2 OFFSET $3"
        ))
        .bind(i64::from(article_id))
        .bind(i64::from(page.limit()))
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            article_id,
            author,
            body,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments (article_id, author, body, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(i64::from(article_id))
        .bind(author.as_str())
        .bind(body.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn apply_votes(
        &self,
        id: CommentId,
        delta: VoteIncrement,
    ) -> DomainResult<Option<VoteOutcome<Comment>>> {
        let update = guarded_vote_sql("comments", "comment_id", COMMENT_COLUMNS);

        for _ in 0..VOTE_ATTEMPTS {
            let updated = sqlx::query_as::<_, CommentRow>(&update)
                .bind(i64::from(id))
                .bind(delta.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?;

            if let Some(row) = updated {
                return Ok(Some(VoteOutcome::Applied(Comment::try_from(row)?)));
            }

            let current =
                sqlx::query_scalar::<_, i32>("SELECT votes FROM comments WHERE comment_id = $1")
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
            "votes of comment {id} kept changing during update"
        )))
    }

    async fn delete(&self, id: CommentId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}
