// src/application/commands/articles/create.rs
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::ArticleCommandService;
use crate::{
    application::{
        commands::payload::{NonBlank, strict_body},
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleBody, ArticleTitle, ArticleWithCommentCount, NewArticle},
        topic::TopicSlug,
        user::Username,
    },
};

pub const INVALID_ARTICLE_BODY: &str = "Bad request! Request body only accepts an object with the properties of author, title, body and topic, while author must be registered, topic does exist and title and body shall not be an empty string.";

pub struct CreateArticleCommand {
    pub payload: Value,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ArticleFields {
    author: String,
    title: String,
    body: String,
    topic: String,
}

impl NonBlank for ArticleFields {
    fn fields(&self) -> Vec<&str> {
        vec![&self.author, &self.title, &self.body, &self.topic]
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let fields: ArticleFields = strict_body(command.payload, INVALID_ARTICLE_BODY)?;

        let topic = TopicSlug::new(fields.topic)?;
        let author = Username::new(fields.author)?;
        let report = self.references.check(Some(&topic), Some(&author)).await?;
        if let Some(message) = report.missing_message() {
            return Err(ApplicationError::not_found(message));
        }

        let new_article = NewArticle {
            title: ArticleTitle::new(fields.title)?,
            topic,
            author,
            body: ArticleBody::new(fields.body)?,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        info!(article_id = %created.id, "article created");

        // A fresh article has no comments yet.
        Ok(ArticleWithCommentCount {
            article: created,
            comment_count: 0,
        }
        .into())
    }
}
