use crate::shared::config::{required, ConfigError, Lookup};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
}

impl JwtConfig {
    /// Load JWT configuration through `lookup`
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        let secret_key = required(lookup, "JWT_SECRET")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET".to_string(),
                value: "<redacted>".to_string(),
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let issuer = lookup("JWT_ISSUER")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "users-graphql".to_string());

        Ok(Self { secret_key, issuer })
    }
}
