// src/application/commands/topics/mod.rs
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::{
    application::{
        commands::payload::{NonBlank, strict_body},
        dto::TopicDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        topic::{Topic, TopicDescription, TopicRepository, TopicSlug},
    },
};

pub const INVALID_TOPIC_BODY: &str = "Bad request! Request body only accepts an object with the properties of slug and description, while slug and description shall not be empty.";

pub struct CreateTopicCommand {
    pub payload: Value,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TopicFields {
    slug: String,
    description: String,
}

impl NonBlank for TopicFields {
    fn fields(&self) -> Vec<&str> {
        vec![&self.slug, &self.description]
    }
}

pub struct TopicCommandService {
    topic_repo: Arc<dyn TopicRepository>,
}

impl TopicCommandService {
    pub fn new(topic_repo: Arc<dyn TopicRepository>) -> Self {
        Self { topic_repo }
    }

    pub async fn create_topic(&self, command: CreateTopicCommand) -> ApplicationResult<TopicDto> {
        let fields: TopicFields = strict_body(command.payload, INVALID_TOPIC_BODY)?;
        let slug = TopicSlug::new(fields.slug)?;
        let topic = Topic {
            slug: slug.clone(),
            description: TopicDescription::new(fields.description)?,
        };

        // The unique key is enforced by the store; the message names the
        // offending slug either way.
        let created = self.topic_repo.insert(topic).await.map_err(|err| match err {
            DomainError::Conflict(_) => {
                ApplicationError::conflict(format!("Key (slug)=({slug}) already exists."))
            }
            other => other.into(),
        })?;
        info!(slug = %created.slug, "topic created");
        Ok(created.into())
    }
}
