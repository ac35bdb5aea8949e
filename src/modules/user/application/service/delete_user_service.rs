use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::user::application::domain::entities::UserId;
use crate::user::application::ports::incoming::use_cases::{DeleteUserError, DeleteUserUseCase};
use crate::user::application::ports::outgoing::{UserRepository, UserRepositoryError};

pub struct DeleteUserService {
    user_repository: Arc<dyn UserRepository + Send + Sync>,
}

impl DeleteUserService {
    pub fn new(user_repository: Arc<dyn UserRepository + Send + Sync>) -> Self {
        Self { user_repository }
    }
}

fn map_repository_error(e: UserRepositoryError) -> DeleteUserError {
    match e {
        UserRepositoryError::UserNotFound => DeleteUserError::UserNotFound,
        UserRepositoryError::DatabaseError(msg) => DeleteUserError::RepositoryError(msg),
        UserRepositoryError::UserAlreadyExists => {
            DeleteUserError::RepositoryError("unexpected conflict while deleting user".into())
        }
    }
}

#[async_trait]
impl DeleteUserUseCase for DeleteUserService {
    async fn execute(&self, user_id: UserId) -> Result<UserId, DeleteUserError> {
        let existing = self
            .user_repository
            .find_by_id(user_id)
            .await
            .map_err(map_repository_error)?
            .ok_or(DeleteUserError::UserNotFound)?;

        self.user_repository
            .delete_user(existing.id)
            .await
            .map_err(map_repository_error)?;

        info!(user_id = %existing.id, "user deleted");
        Ok(existing.id)
    }
}
