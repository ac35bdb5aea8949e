mod jwt_config;
mod jwt_service;

pub use jwt_config::JwtConfig;
pub use jwt_service::{JwtTokenService, ACCESS_TOKEN_TYPE};
