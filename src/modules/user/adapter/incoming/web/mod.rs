pub mod extractors;
pub mod routes;

pub use routes::{graphiql_handler, graphql_handler};
