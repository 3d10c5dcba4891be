pub mod article;
pub mod comment;
pub mod errors;
pub mod pagination;
pub mod topic;
pub mod user;
pub mod votes;
