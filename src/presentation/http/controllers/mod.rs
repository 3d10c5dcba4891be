// src/presentation/http/controllers/mod.rs
pub mod api;
pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;
