// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of `created_at` for new articles and comments. Tests pin it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
