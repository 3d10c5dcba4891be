// src/application/commands/comments/delete.rs
use tracing::info;

use super::CommentCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::comment::CommentId,
};

pub struct DeleteCommentCommand {
    pub comment_id: String,
}

impl CommentCommandService {
    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        let id = CommentId::parse(&command.comment_id)?;
        if !self.comment_repo.delete(id).await? {
            return Err(ApplicationError::not_found(format!(
                "No such comment_id: {id}"
            )));
        }
        info!(comment_id = %id, "comment deleted");
        Ok(())
    }
}
