// src/presentation/http/controllers/api.rs
use crate::presentation::http::openapi::{ApiDoc, EndpointsResponse, endpoints_catalogue};
use axum::Json;
use utoipa::OpenApi;

/// Serves a description of every available endpoint.
#[utoipa::path(
    get,
    path = "/api",
    responses((status = 200, description = "Endpoint catalogue keyed by method and path.", body = EndpointsResponse)),
    tag = "System"
)]
pub async fn get_endpoints() -> Json<EndpointsResponse> {
    Json(endpoints_catalogue(&ApiDoc::openapi()))
}

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
