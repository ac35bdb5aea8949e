use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use std::sync::Arc;
use tracing::debug;

use crate::user::application::domain::entities::{
    DeleteStrategy, NewUser, User, UserChanges, UserId,
};
use crate::user::application::ports::outgoing::{UserRepository, UserRepositoryError};

use super::sea_orm_entity::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    delete_strategy: DeleteStrategy,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, delete_strategy: DeleteStrategy) -> Self {
        Self {
            db,
            delete_strategy,
        }
    }

    fn map_db_error(e: DbErr) -> UserRepositoryError {
        if matches!(e, DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) {
            return UserRepositoryError::UserNotFound;
        }

        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::UserAlreadyExists;
        }

        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let found = UserEntity::find_by_id(user_id.value())
            .filter(UserColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(Self::map_db_error)?;

        Ok(found.map(|model| model.to_domain()))
    }

    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let now = Utc::now();

        let active_user = UserActiveModel {
            id: NotSet,
            first_name: Set(Some(user.first_name)),
            last_name: Set(Some(user.last_name)),
            username: Set(Some(user.username)),
            password: Set(user.password_hash),
            email: Set(Some(user.email)),
            role_id: Set(Some(user.role_id)),
            created_at: Set(Some(now.into())),
            updated_at: Set(Some(now.into())),
            ..Default::default()
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_db_error)?;

        Ok(inserted.to_domain())
    }

    async fn update_user(
        &self,
        user_id: UserId,
        changes: UserChanges,
    ) -> Result<User, UserRepositoryError> {
        let mut active_user = UserActiveModel {
            updated_at: Set(Some(Utc::now().into())),
            ..Default::default()
        };

        if let Some(first_name) = changes.first_name {
            active_user.first_name = Set(Some(first_name));
        }
        if let Some(last_name) = changes.last_name {
            active_user.last_name = Set(Some(last_name));
        }
        if let Some(mobile) = changes.mobile {
            active_user.mobile = Set(Some(mobile));
        }
        if let Some(address) = changes.address {
            active_user.address = Set(Some(address));
        }

        // Same visibility as find_by_id: a row soft-deleted after the lookup is gone.
        let updated = UserEntity::update_many()
            .set(active_user)
            .filter(UserColumn::Id.eq(user_id.value()))
            .filter(UserColumn::DeletedAt.is_null())
            .exec_with_returning(&*self.db)
            .await
            .map_err(Self::map_db_error)?
            .into_iter()
            .next()
            .ok_or(UserRepositoryError::UserNotFound)?;

        Ok(updated.to_domain())
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let rows_affected = match self.delete_strategy {
            DeleteStrategy::Hard => {
                UserEntity::delete_by_id(user_id.value())
                    .exec(&*self.db)
                    .await
                    .map_err(Self::map_db_error)?
                    .rows_affected
            }
            DeleteStrategy::Soft => {
                let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();

                UserEntity::update_many()
                    .col_expr(UserColumn::DeletedAt, Expr::value(now))
                    .col_expr(UserColumn::UpdatedAt, Expr::value(now))
                    .filter(UserColumn::Id.eq(user_id.value()))
                    .filter(UserColumn::DeletedAt.is_null())
                    .exec(&*self.db)
                    .await
                    .map_err(Self::map_db_error)?
                    .rows_affected
            }
        };

        debug!(
            user_id = %user_id,
            strategy = ?self.delete_strategy,
            rows_affected,
            "delete statement executed"
        );

        if rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}
