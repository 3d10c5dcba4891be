pub mod entity;
pub mod listing;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleSummary, ArticleWithCommentCount, NewArticle};
pub use listing::{ArticleFilter, ArticleSort, SortColumn, SortOrder};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleBody, ArticleId, ArticleTitle};
