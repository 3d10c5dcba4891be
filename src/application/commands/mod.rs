pub mod articles;
pub mod comments;
mod payload;
pub mod topics;
pub mod votes;
