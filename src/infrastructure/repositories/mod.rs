// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_comment;
mod postgres_topic;
mod postgres_user;

use crate::domain::votes::MAX_VOTES;

pub use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_topic::PostgresTopicRepository;
pub use postgres_user::PostgresUserRepository;

/// Guarded vote updates retried while concurrent votes keep moving the
/// counter back into range.
const VOTE_ATTEMPTS: usize = 3;

/// `UPDATE` adding `$2` to the votes of row `$1`. The guard is computed in
/// bigint so an out-of-range total matches no row instead of raising.
fn guarded_vote_sql(table: &str, id_column: &str, returning: &str) -> String {
    format!(
        "UPDATE {table} SET votes = votes + $2 \
         WHERE {id_column} = $1 AND votes::bigint + $2 BETWEEN 0 AND {MAX_VOTES} \
         RETURNING {returning}"
    )
}
