use std::sync::Arc;

use crate::domain::{
    article::{ArticleReadRepository, services::ReferenceChecker},
    comment::CommentRepository,
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) references: Arc<ReferenceChecker>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        references: Arc<ReferenceChecker>,
    ) -> Self {
        Self {
            read_repo,
            comment_repo,
            references,
        }
    }
}
