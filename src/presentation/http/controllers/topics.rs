// src/presentation/http/controllers/topics.rs
use crate::application::commands::topics::CreateTopicCommand;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonPayload;
use crate::presentation::http::openapi::{CreateTopicRequest, TopicListResponse, TopicResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};

/// Serves all topics.
#[utoipa::path(
    get,
    path = "/api/topics",
    responses((status = 200, description = "Every topic.", body = TopicListResponse)),
    tag = "Topics"
)]
pub async fn list_topics(Extension(state): Extension<HttpState>) -> HttpResult<Json<TopicListResponse>> {
    let topics = state.services.topic_queries.list_topics().await.into_http()?;
    Ok(Json(TopicListResponse { topics }))
}

/// Adds a topic.
#[utoipa::path(
    post,
    path = "/api/topics",
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "The new topic.", body = TopicResponse),
        (status = 400, description = "Body is not exactly slug and description.", body = ErrorResponse),
        (status = 409, description = "Slug already taken.", body = ErrorResponse)
    ),
    tag = "Topics"
)]
pub async fn create_topic(
    Extension(state): Extension<HttpState>,
    JsonPayload(payload): JsonPayload,
) -> HttpResult<(StatusCode, Json<TopicResponse>)> {
    let topic = state
        .services
        .topic_commands
        .create_topic(CreateTopicCommand { payload })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(TopicResponse { topic })))
}
