// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, CommentDto, TopicDto, UserDto};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    collections::BTreeMap,
    env,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub article: ArticleDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub comment: CommentDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopicResponse {
    pub topic: TopicDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopicListResponse {
    pub topics: Vec<TopicDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user: UserDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<UserDto>,
}

/// Documentation-only request shapes. Bodies are read as loose JSON so that
/// each operation can report its own message for a malformed body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    pub username: String,
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTopicRequest {
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VoteRequest {
    /// Non-zero signed increment.
    pub inc_votes: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EndpointDescription {
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub queries: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EndpointsResponse {
    pub endpoints: BTreeMap<String, EndpointDescription>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::api::get_endpoints,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article_by_id,
        crate::presentation::http::controllers::articles::vote_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::comments::list_article_comments,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::vote_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::topics::list_topics,
        crate::presentation::http::controllers::topics::create_topic,
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::users::get_user
    ),
    components(
        schemas(
            ArticleResponse,
            CommentResponse,
            TopicResponse,
            TopicListResponse,
            UserResponse,
            UserListResponse,
            CreateArticleRequest,
            CreateCommentRequest,
            CreateTopicRequest,
            VoteRequest,
            EndpointDescription,
            EndpointsResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::ArticlePage,
            crate::application::dto::CommentDto,
            crate::application::dto::ArticleCommentDto,
            crate::application::dto::CommentPage,
            crate::application::dto::TopicDto,
            crate::application::dto::UserDto
        )
    ),
    tags(
        (name = "Articles", description = "Article listing, lookup, votes and removal"),
        (name = "Comments", description = "Comments on articles"),
        (name = "Topics", description = "Topic catalogue"),
        (name = "Users", description = "Registered users"),
        (name = "System", description = "Service description")
    ),
    info(
        title = "News Aggregator API",
        description = "Topics, articles, comments and users of a news aggregator",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

const METHODS: [&str; 5] = ["get", "post", "put", "patch", "delete"];

/// Flattens the OpenAPI document into `"<METHOD> <path>"` entries, with
/// `:name` path parameters and the names of query parameters.
pub fn endpoints_catalogue(doc: &utoipa::openapi::OpenApi) -> EndpointsResponse {
    let mut endpoints = BTreeMap::new();
    let value = serde_json::to_value(doc).unwrap_or(Value::Null);

    if let Some(paths) = value.get("paths").and_then(Value::as_object) {
        for (path, item) in paths {
            for method in METHODS {
                let Some(operation) = item.get(method) else {
                    continue;
                };
                let key = format!("{} {}", method.to_uppercase(), colon_params(path));
                endpoints.insert(key, describe(operation));
            }
        }
    }

    EndpointsResponse { endpoints }
}

fn describe(operation: &Value) -> EndpointDescription {
    let description = ["summary", "description"]
        .iter()
        .find_map(|field| operation.get(*field).and_then(Value::as_str))
        .unwrap_or_default()
        .trim()
        .to_string();

    let queries = operation
        .get("parameters")
        .and_then(Value::as_array)
        .map(|params| {
            params
                .iter()
                .filter(|param| param.get("in").and_then(Value::as_str) == Some("query"))
                .filter_map(|param| param.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    EndpointDescription {
        description,
        queries,
    }
}

fn colon_params(path: &str) -> String {
    path.split('/')
        .map(|segment| match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) => format!(":{name}"),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` (default
/// `spec/openapi.json`) and returns the path written.
pub fn write_openapi_snapshot() -> std::io::Result<PathBuf> {
    let doc = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(path.to_path_buf())
}
