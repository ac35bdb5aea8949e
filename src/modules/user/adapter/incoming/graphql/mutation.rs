use async_graphql::{Context, ErrorExtensions, Object, Result};
use tracing::debug;

use crate::user::application::domain::entities::UserId;
use crate::user::application::ports::incoming::use_cases::{
    CallerKey, CreateUserCommand, CreateUserError, UpdateUserCommand, UpdateUserError,
};
use crate::user::application::UserUseCases;

use super::context::{CurrentUser, RequestCaller};
use super::errors::unauthenticated;
use super::types::{UserCreateInput, UserDeletePayload, UserObject, UserUpdateInput};

pub(super) fn current_user(ctx: &Context<'_>) -> Result<UserId> {
    ctx.data_opt::<CurrentUser>()
        .map(|user| user.0)
        .ok_or_else(unauthenticated)
}

fn caller_key(ctx: &Context<'_>) -> CallerKey {
    if let Some(CurrentUser(user_id)) = ctx.data_opt::<CurrentUser>() {
        return CallerKey::for_user(user_id.value());
    }

    ctx.data_opt::<RequestCaller>()
        .map(|caller| caller.0.clone())
        .unwrap_or_else(|| CallerKey::for_address("unknown"))
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Registers a user. Throttled per caller.
    async fn create_user(&self, ctx: &Context<'_>, input: UserCreateInput) -> Result<UserObject> {
        let use_cases = ctx.data::<UserUseCases>()?;

        let command = CreateUserCommand::new(
            input.first_name,
            input.last_name,
            input.username,
            input.email,
            input.role_id.0,
            input.password,
        )
        .map_err(|e| CreateUserError::from(e).extend())?;

        let caller = caller_key(ctx);
        debug!(caller = %caller, "createUser");

        let user = use_cases
            .create
            .execute(&caller, command)
            .await
            .map_err(|e| e.extend())?;

        Ok(user.into())
    }

    /// Applies the non-blank fields of `input` to the authenticated user.
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        input: Option<UserUpdateInput>,
    ) -> Result<UserObject> {
        let user_id = current_user(ctx)?;
        let use_cases = ctx.data::<UserUseCases>()?;
        let input = input.unwrap_or_default();

        let command = UpdateUserCommand::new(
            user_id,
            input.first_name,
            input.last_name,
            input.mobile,
            input.address,
        )
        .map_err(|e| UpdateUserError::from(e).extend())?;

        let user = use_cases
            .update
            .execute(command)
            .await
            .map_err(|e| e.extend())?;

        Ok(user.into())
    }

    async fn delete_user(&self, ctx: &Context<'_>) -> Result<UserDeletePayload> {
        let user_id = current_user(ctx)?;
        let use_cases = ctx.data::<UserUseCases>()?;

        let deleted = use_cases
            .delete
            .execute(user_id)
            .await
            .map_err(|e| e.extend())?;

        Ok(deleted.into())
    }
}
