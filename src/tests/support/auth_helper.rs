use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::user::adapter::outgoing::jwt::{JwtConfig, JwtTokenService, ACCESS_TOKEN_TYPE};
use crate::user::application::ports::outgoing::TokenClaims;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only_0123456789";
pub const TEST_JWT_ISSUER: &str = "users-graphql-test";

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        issuer: TEST_JWT_ISSUER.to_string(),
    })
}

/// Signs an access token the way the identity service would.
pub fn access_token_for(user_id: i32) -> String {
    let now = Utc::now().timestamp();
    let claims = TokenClaims {
        sub: user_id,
        exp: now + 3600,
        iat: now,
        nbf: now,
        iss: TEST_JWT_ISSUER.to_string(),
        token_type: ACCESS_TOKEN_TYPE.to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("token should be generated")
}

pub fn bearer_for(user_id: i32) -> String {
    format!("Bearer {}", access_token_for(user_id))
}
