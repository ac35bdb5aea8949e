use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::user::application::UserUseCases;

use super::mutation::current_user;
use super::types::UserObject;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The authenticated user.
    async fn me(&self, ctx: &Context<'_>) -> Result<UserObject> {
        let user_id = current_user(ctx)?;
        let use_cases = ctx.data::<UserUseCases>()?;

        let user = use_cases
            .fetch
            .execute(user_id)
            .await
            .map_err(|e| e.extend())?;

        Ok(user.into())
    }
}
