// src/domain/article/services/mod.rs
use std::sync::Arc;

use tracing::debug;

use crate::domain::errors::DomainResult;
use crate::domain::topic::{TopicRepository, TopicSlug};
use crate::domain::user::{UserRepository, Username};

/// Domain service answering whether the topic and author an article refers
/// to exist. Both lookups are independent reads.
pub struct ReferenceChecker {
    topics: Arc<dyn TopicRepository>,
    users: Arc<dyn UserRepository>,
}

impl ReferenceChecker {
    pub fn new(topics: Arc<dyn TopicRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { topics, users }
    }

    pub async fn topic_exists(&self, slug: &TopicSlug) -> DomainResult<bool> {
        self.topics.exists(slug).await
    }

    pub async fn author_exists(&self, username: &Username) -> DomainResult<bool> {
        self.users.exists(username).await
    }

    /// Looks up whichever references are supplied and records the ones that
    /// are missing.
    pub async fn check(
        &self,
        topic: Option<&TopicSlug>,
        author: Option<&Username>,
    ) -> DomainResult<ReferenceReport> {
        let mut report = ReferenceReport::default();

        if let Some(slug) = topic {
            if !self.topic_exists(slug).await? {
                report.missing_topic = Some(slug.clone());
            }
        }

        if let Some(username) = author {
            if !self.author_exists(username).await? {
                report.missing_author = Some(username.clone());
            }
        }

        debug!(
            missing_topic = report.missing_topic.is_some(),
            missing_author = report.missing_author.is_some(),
            "reference check"
        );
        Ok(report)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceReport {
    pub missing_topic: Option<TopicSlug>,
    pub missing_author: Option<Username>,
}

impl ReferenceReport {
    /// Message naming every missing reference, or `None` when nothing is missing.
    pub fn missing_message(&self) -> Option<String> {
        match (&self.missing_topic, &self.missing_author) {
            (Some(topic), Some(author)) => Some(format!(
                "No such topic: {topic} and no such author: {author}"
            )),
            (Some(topic), None) => Some(format!("No such topic: {topic}")),
            (None, Some(author)) => Some(format!("No such author: {author}")),
            (None, None) => None,
        }
    }
}
