// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            topics::TopicCommandService,
        },
        ports::time::Clock,
        queries::{
            articles::ArticleQueryService, topics::TopicQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ReferenceChecker},
        comment::CommentRepository,
        topic::TopicRepository,
        user::UserRepository,
    },
};

/// Repository handles the application layer is wired from.
pub struct Repositories {
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub topics: Arc<dyn TopicRepository>,
    pub users: Arc<dyn UserRepository>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub topic_commands: Arc<TopicCommandService>,
    pub topic_queries: Arc<TopicQueryService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, clock: Arc<dyn Clock>) -> Self {
        let references = Arc::new(ReferenceChecker::new(
            Arc::clone(&repos.topics),
            Arc::clone(&repos.users),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&references),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.comments),
            Arc::clone(&references),
        ));
        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.article_read),
            Arc::clone(&references),
            Arc::clone(&clock),
        ));
        let topic_commands = Arc::new(TopicCommandService::new(Arc::clone(&repos.topics)));
        let topic_queries = Arc::new(TopicQueryService::new(Arc::clone(&repos.topics)));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&repos.users)));

        Self {
            article_commands,
            article_queries,
            comment_commands,
            topic_commands,
            topic_queries,
            user_queries,
        }
    }
}
