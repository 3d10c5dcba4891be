pub mod articles;
pub mod comments;
pub mod pagination;
pub mod serde_time;
pub mod topics;
pub mod users;

pub use articles::{ArticleDto, ArticleSummaryDto};
pub use comments::{ArticleCommentDto, CommentDto};
pub use pagination::{ArticlePage, CommentPage};
pub use topics::TopicDto;
pub use users::UserDto;
