// src/application/commands/payload.rs
//! Request bodies arrive as loose JSON. A body is accepted only when it is an
//! object carrying exactly the expected keys, each a non-blank string.
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::application::error::{ApplicationError, ApplicationResult};

/// Deserializes `payload` into `T` (which should deny unknown fields) and
/// rejects it with `message` on any shape mismatch or blank field.
pub(crate) fn strict_body<T>(payload: Value, message: &str) -> ApplicationResult<T>
where
    T: DeserializeOwned + NonBlank,
{
    serde_json::from_value::<T>(payload)
        .ok()
        .filter(NonBlank::is_complete)
        .ok_or_else(|| ApplicationError::validation(message))
}

pub(crate) trait NonBlank {
    fn fields(&self) -> Vec<&str>;

    fn is_complete(&self) -> bool {
        self.fields().iter().all(|field| !field.trim().is_empty())
    }
}
