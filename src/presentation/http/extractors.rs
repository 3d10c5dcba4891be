// src/presentation/http/extractors.rs
use crate::application::queries::articles::RawParams;
use axum::{
    extract::{FromRequest, FromRequestParts, RawQuery, Request},
    http::request::Parts,
};
use bytes::Bytes;
use serde_json::{Map, Value};

use super::error::{HttpError, MALFORMED_JSON};

const MALFORMED_QUERY: &str = "Bad request! Malformed query string!";

/// Request body as loose JSON. Shape checks happen in the application layer
/// so that each operation can report its own message. An empty body reads as
/// an empty object.
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Value);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| HttpError::bad_request(MALFORMED_JSON))?;
        parse_body(&bytes).map(Self)
    }
}

fn parse_body(bytes: &[u8]) -> Result<Value, HttpError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(bytes).map_err(|_| HttpError::bad_request(MALFORMED_JSON))
}

/// Query-string pairs kept as raw strings; validation is explicit downstream.
/// A repeated key keeps its last value.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(pub RawParams);

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let RawQuery(query) = RawQuery::from_request_parts(parts, state)
            .await
            .map_err(|_| HttpError::bad_request(MALFORMED_QUERY))?;
        parse_query(query.as_deref().unwrap_or_default()).map(Self)
    }
}

fn parse_query(query: &str) -> Result<RawParams, HttpError> {
    serde_urlencoded::from_str::<Vec<(String, String)>>(query)
        .map(|pairs| pairs.into_iter().collect())
        .map_err(|_| HttpError::bad_request(MALFORMED_QUERY))
}
