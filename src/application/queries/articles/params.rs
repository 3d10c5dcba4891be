// src/application/queries/articles/params.rs
//! Explicit parse-and-validate step for query-string parameters. Every value
//! arrives as a string; nothing reaches a repository before it has been
//! checked here.
use std::collections::HashMap;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{ArticleFilter, ArticleSort, SortColumn, SortOrder},
        pagination::PageRequest,
        topic::TopicSlug,
        user::Username,
    },
};

pub type RawParams = HashMap<String, String>;

const LISTING_KEYS: [&str; 6] = ["author", "topic", "sort_by", "order", "limit", "p"];
const COMMENT_LISTING_KEYS: [&str; 2] = ["limit", "p"];

pub const INVALID_LISTING_QUERY: &str = "Bad request! Invalid query. Only accept the queries for author, topic, sort_by, order, limit and/or p";
pub const INVALID_COMMENT_LISTING_QUERY: &str =
    "Bad request! Invalid query. Only accept the queries for limit and/or p";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListParams {
    pub filter: ArticleFilter,
    pub sort: ArticleSort,
    pub page: PageRequest,
}

impl ArticleListParams {
    /// Checks run in a fixed order and the first failure wins: unknown keys,
    /// then `sort_by`, then `order`, then `limit`/`p`.
    pub fn parse(raw: &RawParams) -> ApplicationResult<Self> {
        ensure_known_keys(raw, &LISTING_KEYS, INVALID_LISTING_QUERY)?;

        let column = raw
            .get("sort_by")
            .map(|value| value.parse::<SortColumn>())
            .transpose()?
            .unwrap_or_default();
        let order = raw
            .get("order")
            .map(|value| value.parse::<SortOrder>())
            .transpose()?
            .unwrap_or_default();
        let page = parse_page(raw)?;

        let mut filter = ArticleFilter::default();
        if let Some(topic) = supplied(raw, "topic") {
            filter = filter.with_topic(TopicSlug::new(topic)?);
        }
        if let Some(author) = supplied(raw, "author") {
            filter = filter.with_author(Username::new(author)?);
        }

        Ok(Self {
            filter,
            sort: ArticleSort::new(column, order),
            page,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentListParams {
    pub page: PageRequest,
}

impl CommentListParams {
    pub fn parse(raw: &RawParams) -> ApplicationResult<Self> {
        ensure_known_keys(raw, &COMMENT_LISTING_KEYS, INVALID_COMMENT_LISTING_QUERY)?;
        Ok(Self {
            page: parse_page(raw)?,
        })
    }
}

fn ensure_known_keys(raw: &RawParams, known: &[&str], message: &str) -> ApplicationResult<()> {
    if raw.keys().all(|key| known.contains(&key.as_str())) {
        Ok(())
    } else {
        Err(ApplicationError::validation(message))
    }
}

fn parse_page(raw: &RawParams) -> ApplicationResult<PageRequest> {
    Ok(PageRequest::parse(
        raw.get("limit").map(String::as_str),
        raw.get("p").map(String::as_str),
    )?)
}

// Blank filter values count as absent.
fn supplied<'a>(raw: &'a RawParams, key: &str) -> Option<&'a str> {
    raw.get(key)
        .map(String::as_str)
        .filter(|value| !value.trim().is_empty())
}
