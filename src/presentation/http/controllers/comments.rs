// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand, VoteCommentCommand},
    dto::CommentPage,
    queries::articles::ListArticleCommentsQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonPayload, QueryParams};
use crate::presentation::http::openapi::{CommentResponse, VoteRequest};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

/// Serves the comments of an article, oldest first.
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    params(
        ("article_id" = String, Path, description = "Positive integer article id"),
        ("limit" = Option<u32>, Query, description = "Page size, defaults to 10"),
        ("p" = Option<u32>, Query, description = "1-based page number, defaults to 1")
    ),
    responses(
        (status = 200, description = "One page of comments and the article's comment total.", body = CommentPage),
        (status = 400, description = "Malformed id or query.", body = ErrorResponse),
        (status = 404, description = "No such article, or page past the end.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_article_comments(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
    QueryParams(params): QueryParams,
) -> HttpResult<Json<CommentPage>> {
    state
        .services
        .article_queries
        .list_comments(ListArticleCommentsQuery { article_id, params })
        .await
        .into_http()
        .map(Json)
}

/// Adds a comment to an article.
#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = String, Path, description = "Positive integer article id")),
    request_body = crate::presentation::http::openapi::CreateCommentRequest,
    responses(
        (status = 201, description = "The new comment.", body = CommentResponse),
        (status = 400, description = "Malformed id, or body is not exactly username and body.", body = ErrorResponse),
        (status = 404, description = "No such article or author.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> HttpResult<(StatusCode, Json<CommentResponse>)> {
    let comment = state
        .services
        .comment_commands
        .create_comment(CreateCommentCommand {
            article_id,
            payload,
        })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

/// Increments or decrements a comment's votes.
#[utoipa::path(
    patch,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = String, Path, description = "Positive integer comment id")),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "The updated comment.", body = CommentResponse),
        (status = 400, description = "Malformed id or body, or votes would drop below zero.", body = ErrorResponse),
        (status = 404, description = "No such comment.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn vote_comment(
    Extension(state): Extension<HttpState>,
    Path(comment_id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> HttpResult<Json<CommentResponse>> {
    let comment = state
        .services
        .comment_commands
        .vote_comment(VoteCommentCommand {
            comment_id,
            payload,
        })
        .await
        .into_http()?;
    Ok(Json(CommentResponse { comment }))
}

/// Deletes a comment.
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = String, Path, description = "Positive integer comment id")),
    responses(
        (status = 204, description = "Deleted."),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 404, description = "No such comment.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Path(comment_id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { comment_id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
