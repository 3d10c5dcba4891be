// src/application/commands/articles/vote.rs
use serde_json::Value;

use super::ArticleCommandService;
use crate::{
    application::{
        commands::votes::{parse_vote_body, rejection_message},
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, votes::VoteOutcome},
};

pub struct VoteArticleCommand {
    pub article_id: String,
    pub payload: Value,
}

impl ArticleCommandService {
    pub async fn vote_article(&self, command: VoteArticleCommand) -> ApplicationResult<ArticleDto> {
        let delta = parse_vote_body(&command.payload)?;
        let id = ArticleId::parse(&command.article_id)?;

        match self.write_repo.apply_votes(id, delta).await? {
            Some(VoteOutcome::Applied(article)) => Ok(article.into()),
            Some(VoteOutcome::Rejected(rejection)) => Err(ApplicationError::validation(
                rejection_message("article", rejection),
            )),
            None => Err(ApplicationError::not_found(format!(
                "No such article_id: {id}"
            ))),
        }
    }
}
