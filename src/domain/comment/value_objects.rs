use crate::domain::errors::{DomainError, DomainResult, WRONG_ID_TYPE};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(WRONG_ID_TYPE.into()))
        } else {
            Ok(Self(id))
        }
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        raw.parse::<i64>()
            .map_err(|_| DomainError::Validation(WRONG_ID_TYPE.into()))
            .and_then(Self::new)
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("body cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_non_numeric_ids() {
        assert!(CommentId::parse("abc").is_err());
        assert!(CommentId::parse("-1").is_err());
        assert_eq!(CommentId::parse("1000").unwrap(), CommentId(1000));
    }
}
