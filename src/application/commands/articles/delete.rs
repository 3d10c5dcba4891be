// src/application/commands/articles/delete.rs
use tracing::info;

use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub article_id: String,
}

impl ArticleCommandService {
    /// Removes the article and every comment on it in one unit of work.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::parse(&command.article_id)?;
        if !self.write_repo.delete_with_comments(id).await? {
            return Err(ApplicationError::not_found(format!(
                "No such article_id: {id}"
            )));
        }
        info!(article_id = %id, "article deleted");
        Ok(())
    }
}
