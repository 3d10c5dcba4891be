use super::{ArticleQueryService, params::{ArticleListParams, RawParams}};
use crate::{
    application::{
        dto::ArticlePage,
        error::{ApplicationError, ApplicationResult},
    },
    domain::pagination::PAGE_NOT_FOUND,
};
use tracing::debug;

pub struct ListArticlesQuery {
    pub params: RawParams,
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<ArticlePage> {
        let ArticleListParams { filter, sort, page } = ArticleListParams::parse(&query.params)?;

        let total_count = self.read_repo.count(&filter).await?;
        debug!(total_count, ?filter, ?sort, ?page, "article listing");

        // No rows for a filtered listing: the filter value itself may not exist.
        if total_count == 0 && !filter.is_empty() {
            let report = self
                .references
                .check(filter.topic.as_ref(), filter.author.as_ref())
                .await?;
            if let Some(message) = report.missing_message() {
                return Err(ApplicationError::not_found(message));
            }
        }

        if page.is_beyond(total_count) {
            return Err(ApplicationError::not_found(PAGE_NOT_FOUND));
        }

        if total_count == 0 {
            return Ok(ArticlePage {
                total_count,
                articles: Vec::new(),
            });
        }

        let rows = self.read_repo.list_page(&filter, sort, page).await?;
        Ok(ArticlePage {
            total_count,
            articles: rows.into_iter().map(Into::into).collect(),
        })
    }
}
