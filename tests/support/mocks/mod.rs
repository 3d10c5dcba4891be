// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod failing;
pub mod store;
pub mod time;

/* -------------------------------- re-exports -------------------------------- */

pub use failing::{CountingTopicRepo, FailingArticleRead};
pub use store::InMemoryStore;
pub use time::{FixedClock, fixed_now};
