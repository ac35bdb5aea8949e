use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::user::application::domain::entities::User;
use crate::user::application::ports::incoming::use_cases::{
    UpdateUserCommand, UpdateUserError, UpdateUserUseCase,
};
use crate::user::application::ports::outgoing::{UserRepository, UserRepositoryError};

pub struct UpdateUserService {
    user_repository: Arc<dyn UserRepository + Send + Sync>,
}

impl UpdateUserService {
    pub fn new(user_repository: Arc<dyn UserRepository + Send + Sync>) -> Self {
        Self { user_repository }
    }
}

fn map_repository_error(e: UserRepositoryError) -> UpdateUserError {
    match e {
        UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
        UserRepositoryError::DatabaseError(msg) => UpdateUserError::RepositoryError(msg),
        UserRepositoryError::UserAlreadyExists => UpdateUserError::RepositoryError(
            "unexpected uniqueness conflict while updating profile".to_string(),
        ),
    }
}

#[async_trait]
impl UpdateUserUseCase for UpdateUserService {
    async fn execute(&self, command: UpdateUserCommand) -> Result<User, UpdateUserError> {
        let user_id = command.user_id();

        // 1️⃣ The row must exist before anything is written
        let existing = self
            .user_repository
            .find_by_id(user_id)
            .await
            .map_err(map_repository_error)?
            .ok_or(UpdateUserError::UserNotFound)?;

        // 2️⃣ Persist only the provided fields
        let updated = self
            .user_repository
            .update_user(existing.id, command.into_changes())
            .await
            .map_err(map_repository_error)?;

        info!(user_id = %updated.id, "user profile updated");
        Ok(updated)
    }
}
