use super::UserQueryService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

pub struct GetUserQuery {
    pub username: String,
}

impl UserQueryService {
    pub async fn get_user(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let not_found = || ApplicationError::not_found(format!("No such username: {}", query.username));
        // A blank segment cannot name a user.
        let username = Username::new(query.username.clone()).map_err(|_| not_found())?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(not_found)?;
        Ok(user.into())
    }
}
