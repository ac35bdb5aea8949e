use async_graphql::{EmptySubscription, Schema};

use crate::user::application::UserUseCases;

use super::mutation::MutationRoot;
use super::query::QueryRoot;

pub type UserSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(use_cases: UserUseCases) -> UserSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(use_cases)
        .finish()
}
