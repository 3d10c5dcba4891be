use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ArticleCommentDto, ArticleSummaryDto};

/// One page of the article listing. `total_count` is the size of the
/// filtered set before pagination.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticlePage {
    pub total_count: u64,
    pub articles: Vec<ArticleSummaryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentPage {
    pub total_count: u64,
    pub comments: Vec<ArticleCommentDto>,
}
