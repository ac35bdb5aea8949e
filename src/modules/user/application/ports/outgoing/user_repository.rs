use async_trait::async_trait;

use crate::user::application::domain::entities::{NewUser, User, UserChanges, UserId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Live (not soft-deleted) user by id.
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserRepositoryError>;

    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Writes only the columns present in `changes`, plus `updated_at`.
    async fn update_user(
        &self,
        user_id: UserId,
        changes: UserChanges,
    ) -> Result<User, UserRepositoryError>;

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
}
