use super::{
    ArticleQueryService,
    params::{CommentListParams, RawParams},
};
use crate::{
    application::{
        dto::CommentPage,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, pagination::PAGE_NOT_FOUND},
};

pub struct ListArticleCommentsQuery {
    pub article_id: String,
    pub params: RawParams,
}

impl ArticleQueryService {
    pub async fn list_comments(
        &self,
        query: ListArticleCommentsQuery,
    ) -> ApplicationResult<CommentPage> {
        let article_id = ArticleId::parse(&query.article_id)?;
        let CommentListParams { page } = CommentListParams::parse(&query.params)?;

        let total_count = self.comment_repo.count_for_article(article_id).await?;
        if total_count == 0 && !self.read_repo.exists(article_id).await? {
            return Err(ApplicationError::not_found(format!(
                "No such article_id: {article_id}"
            )));
        }

        if page.is_beyond(total_count) {
            return Err(ApplicationError::not_found(PAGE_NOT_FOUND));
        }

        let comments = if total_count == 0 {
            Vec::new()
        } else {
            self.comment_repo
                .list_page_for_article(article_id, page)
                .await?
        };

        Ok(CommentPage {
            total_count,
            comments: comments.into_iter().map(Into::into).collect(),
        })
    }
}
