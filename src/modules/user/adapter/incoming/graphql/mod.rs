mod context;
mod errors;
mod mutation;
mod query;
mod schema;
mod types;


pub use context::{CurrentUser, RequestCaller};
pub use schema::{build_schema, UserSchema};
