// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle};
use crate::domain::topic::TopicSlug;
use crate::domain::user::Username;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub topic: TopicSlug,
    pub author: Username,
    pub body: ArticleBody,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

/// An article together with the number of comments referencing it.
#[derive(Debug, Clone)]
pub struct ArticleWithCommentCount {
    pub article: Article,
    pub comment_count: i64,
}

/// Row of the article listing. Carries everything but the body.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub topic: TopicSlug,
    pub author: Username,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub topic: TopicSlug,
    pub author: Username,
    pub body: ArticleBody,
    pub created_at: DateTime<Utc>,
}
