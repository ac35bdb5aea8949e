pub mod graphql;
pub mod web;
