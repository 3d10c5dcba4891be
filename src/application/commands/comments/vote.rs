// src/application/commands/comments/vote.rs
use serde_json::Value;

use super::CommentCommandService;
use crate::{
    application::{
        commands::votes::{parse_vote_body, rejection_message},
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{comment::CommentId, votes::VoteOutcome},
};

pub struct VoteCommentCommand {
    pub comment_id: String,
    pub payload: Value,
}

impl CommentCommandService {
    pub async fn vote_comment(&self, command: VoteCommentCommand) -> ApplicationResult<CommentDto> {
        let delta = parse_vote_body(&command.payload)?;
        let id = CommentId::parse(&command.comment_id)?;

        match self.comment_repo.apply_votes(id, delta).await? {
            Some(VoteOutcome::Applied(comment)) => Ok(comment.into()),
            Some(VoteOutcome::Rejected(rejection)) => Err(ApplicationError::validation(
                rejection_message("comment", rejection),
            )),
            None => Err(ApplicationError::not_found(format!(
                "No such comment_id: {id}"
            ))),
        }
    }
}
