// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, VoteArticleCommand},
    dto::ArticlePage,
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonPayload, QueryParams};
use crate::presentation::http::openapi::{ArticleResponse, VoteRequest};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

/// Serves the articles, filtered, sorted and paginated.
#[utoipa::path(
    get,
    path = "/api/articles",
    params(
        ("author" = Option<String>, Query, description = "Only articles written by this username"),
        ("topic" = Option<String>, Query, description = "Only articles under this topic slug"),
        ("sort_by" = Option<String>, Query, description = "article_id, title, topic, author, created_at (default), votes or comment_count"),
        ("order" = Option<String>, Query, description = "asc or desc (default), case-insensitive"),
        ("limit" = Option<u32>, Query, description = "Page size, defaults to 10"),
        ("p" = Option<u32>, Query, description = "1-based page number, defaults to 1")
    ),
    responses(
        (status = 200, description = "One page of articles and the size of the filtered set.", body = ArticlePage),
        (status = 400, description = "Unrecognised or invalid query parameter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown topic or author, or page past the end.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams,
) -> HttpResult<Json<ArticlePage>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery { params })
        .await
        .into_http()
        .map(Json)
}

/// Adds an article.
#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = crate::presentation::http::openapi::CreateArticleRequest,
    responses(
        (status = 201, description = "The new article with a comment count of zero.", body = ArticleResponse),
        (status = 400, description = "Body is not exactly author, title, body and topic.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Author or topic does not exist.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonPayload(payload): JsonPayload,
) -> HttpResult<(StatusCode, Json<ArticleResponse>)> {
    let article = state
        .services
        .article_commands
        .create_article(CreateArticleCommand { payload })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(ArticleResponse { article })))
}

/// Serves an article by its id, with its comment count.
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    params(("article_id" = String, Path, description = "Positive integer article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleResponse),
        (status = 400, description = "Malformed id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_id(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: article_id })
        .await
        .into_http()?;
    Ok(Json(ArticleResponse { article }))
}

/// Increments or decrements an article's votes.
#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    params(("article_id" = String, Path, description = "Positive integer article id")),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "The updated article.", body = ArticleResponse),
        (status = 400, description = "Malformed id or body, or votes would drop below zero.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn vote_article(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> HttpResult<Json<ArticleResponse>> {
    let article = state
        .services
        .article_commands
        .vote_article(VoteArticleCommand {
            article_id,
            payload,
        })
        .await
        .into_http()?;
    Ok(Json(ArticleResponse { article }))
}

/// Deletes an article together with its comments.
#[utoipa::path(
    delete,
    path = "/api/articles/{article_id}",
    params(("article_id" = String, Path, description = "Positive integer article id")),
    responses(
        (status = 204, description = "Deleted."),
        (status = 400, description = "Malformed id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { article_id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
