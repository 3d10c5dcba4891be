use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Full comment row, as returned by create and vote operations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub comment_id: i64,
    pub article_id: i64,
    pub author: String,
    pub body: String,
    pub votes: i32,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            comment_id: comment.id.into(),
            article_id: comment.article_id.into(),
            author: comment.author.into_inner(),
            body: comment.body.into_inner(),
            votes: comment.votes,
            created_at: comment.created_at,
        }
    }
}

/// Comment as listed under its article; the article id is implied by the path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleCommentDto {
    pub comment_id: i64,
    pub votes: i32,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub author: String,
    pub body: String,
}

impl From<Comment> for ArticleCommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            comment_id: comment.id.into(),
            votes: comment.votes,
            created_at: comment.created_at,
            author: comment.author.into_inner(),
            body: comment.body.into_inner(),
        }
    }
}
