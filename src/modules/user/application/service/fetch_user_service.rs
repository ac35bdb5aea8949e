use async_trait::async_trait;
use std::sync::Arc;

use crate::user::application::domain::entities::{User, UserId};
use crate::user::application::ports::incoming::use_cases::{FetchUserError, FetchUserUseCase};
use crate::user::application::ports::outgoing::{UserRepository, UserRepositoryError};

pub struct FetchUserService {
    user_repository: Arc<dyn UserRepository + Send + Sync>,
}

impl FetchUserService {
    pub fn new(user_repository: Arc<dyn UserRepository + Send + Sync>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl FetchUserUseCase for FetchUserService {
    async fn execute(&self, user_id: UserId) -> Result<User, FetchUserError> {
        self.user_repository
            .find_by_id(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => FetchUserError::UserNotFound,
                other => FetchUserError::RepositoryError(other.to_string()),
            })?
            .ok_or(FetchUserError::UserNotFound)
    }
}
