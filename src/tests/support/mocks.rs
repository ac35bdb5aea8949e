use async_trait::async_trait;
use mockall::mock;

use crate::user::application::domain::entities::{NewUser, User, UserChanges, UserId};
use crate::user::application::ports::outgoing::{UserRepository, UserRepositoryError};

mock! {
    pub UserRepo {}
    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserRepositoryError>;

        async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

        async fn update_user(
            &self,
            user_id: UserId,
            changes: UserChanges,
        ) -> Result<User, UserRepositoryError>;

        async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
    }
}
