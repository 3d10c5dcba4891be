use crate::domain::article::{Article, ArticleSummary, ArticleWithCommentCount};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<i64>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            article_id: article.id.into(),
            title: article.title.into_inner(),
            topic: article.topic.into_inner(),
            author: article.author.into_inner(),
            body: article.body.into_inner(),
            created_at: article.created_at,
            votes: article.votes,
            comment_count: None,
        }
    }
}

impl From<ArticleWithCommentCount> for ArticleDto {
    fn from(value: ArticleWithCommentCount) -> Self {
        Self {
            comment_count: Some(value.comment_count),
            ..Self::from(value.article)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(summary: ArticleSummary) -> Self {
        Self {
            article_id: summary.id.into(),
            title: summary.title.into_inner(),
            topic: summary.topic.into_inner(),
            author: summary.author.into_inner(),
            created_at: summary.created_at,
            votes: summary.votes,
            comment_count: summary.comment_count,
        }
    }
}
