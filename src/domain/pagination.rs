// src/domain/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_LIMIT: u32 = 10;
pub const DEFAULT_PAGE: u32 = 1;

pub const PAGE_NOT_FOUND: &str = "Not Found";

const INVALID_LIMIT: &str = "Bad request! Invalid 'limit' query. Only accept a positive integer";
const INVALID_PAGE: &str = "Bad request! Invalid 'p' query. Only accept a positive integer";
const INVALID_LIMIT_AND_PAGE: &str =
    "Bad request! Invalid 'limit' and 'p' query. Only accept a positive integer";

/// A 1-based page of at most `limit` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: u32,
    page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

impl PageRequest {
    pub fn new(limit: u32, page: u32) -> DomainResult<Self> {
        match (limit == 0, page == 0) {
            (true, true) => Err(DomainError::Validation(INVALID_LIMIT_AND_PAGE.into())),
            (true, false) => Err(DomainError::Validation(INVALID_LIMIT.into())),
            (false, true) => Err(DomainError::Validation(INVALID_PAGE.into())),
            (false, false) => Ok(Self { limit, page }),
        }
    }

    /// Parses raw `limit` / `p` query values. Absent values fall back to the
    /// defaults; present values must be positive integers. When both are bad
    /// the combined message is reported.
    pub fn parse(limit: Option<&str>, page: Option<&str>) -> DomainResult<Self> {
        let limit = limit.map_or(Some(DEFAULT_LIMIT), parse_positive);
        let page = page.map_or(Some(DEFAULT_PAGE), parse_positive);
        Self::new(limit.unwrap_or(0), page.unwrap_or(0))
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.limit) * u64::from(self.page - 1)
    }

    /// A page past the end of the result set. The first page always exists,
    /// even for an empty result.
    pub fn is_beyond(&self, total_count: u64) -> bool {
        self.page > 1 && self.offset() >= total_count
    }
}

/// Any positive integer, written plainly or as an integral decimal (`5.0`).
/// Values past `u32::MAX` are clamped; no result set is that large.
fn parse_positive(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    let value = match raw.parse::<u64>() {
        Ok(value) => value,
        Err(_) => {
            let float = raw.parse::<f64>().ok()?;
            if !float.is_finite() || float.fract() != 0.0 || float < 1.0 {
                return None;
            }
            if float >= u64::MAX as f64 {
                u64::MAX
            } else {
                float as u64
            }
        }
    };
    (value > 0).then(|| u32::try_from(value).unwrap_or(u32::MAX))
}
