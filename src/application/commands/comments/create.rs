// src/application/commands/comments/create.rs
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::CommentCommandService;
use crate::{
    application::{
        commands::payload::{NonBlank, strict_body},
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleId,
        comment::{CommentBody, NewComment},
        user::Username,
    },
};

pub const INVALID_COMMENT_BODY: &str = "Bad request! Request body only accepts an object with the properties of username and body, while username is registered and body shall not be an empty string.";

pub struct CreateCommentCommand {
    pub article_id: String,
    pub payload: Value,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CommentFields {
    username: String,
    body: String,
}

impl NonBlank for CommentFields {
    fn fields(&self) -> Vec<&str> {
        vec![&self.username, &self.body]
    }
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let article_id = ArticleId::parse(&command.article_id)?;
        let fields: CommentFields = strict_body(command.payload, INVALID_COMMENT_BODY)?;

        if !self.article_repo.exists(article_id).await? {
            return Err(ApplicationError::not_found(format!(
                "No such article_id: {article_id}"
            )));
        }

        let author = Username::new(fields.username)?;
        if !self.references.author_exists(&author).await? {
            return Err(ApplicationError::not_found(format!(
                "No such author: {author}"
            )));
        }

        let comment = self
            .comment_repo
            .insert(NewComment {
                article_id,
                author,
                body: CommentBody::new(fields.body)?,
                created_at: self.clock.now(),
            })
            .await?;
        info!(comment_id = %comment.id, article_id = %article_id, "comment created");
        Ok(comment.into())
    }
}
