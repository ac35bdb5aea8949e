pub mod auth_helper;
pub mod fixtures;
pub mod mocks;
pub mod stubs;
pub mod use_cases_builder;
