use argon2::{
    password_hash::{PasswordHasher as _, SaltString},
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::user::application::ports::outgoing::{HashError, HashingParams, PasswordHasher};

/// Argon2id hasher. Cost parameters arrive with every call so a config
/// change takes effect on the next request.
#[derive(Clone, Default)]
pub struct Argon2Hasher {
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_fixed_salt(salt: &str) -> Self {
        Self {
            salt_override: Some(SaltString::from_b64(salt).expect("Invalid salt")),
        }
    }
}

fn argon2_params(params: &HashingParams) -> Result<Params, HashError> {
    Params::new(params.memory_kib, params.iterations, params.parallelism, None)
        .map_err(|e| HashError::InvalidParams(e.to_string()))
}

#[async_trait]
impl PasswordHasher for Argon2Hasher {
    async fn hash_password(
        &self,
        password: &str,
        params: &HashingParams,
    ) -> Result<String, HashError> {
        let argon2_params = argon2_params(params)?;
        let password = password.to_string();

        #[cfg(test)]
        let salt_override = self.salt_override.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

            #[cfg(test)]
            let salt = salt_override.unwrap_or_else(|| SaltString::generate(&mut OsRng));

            #[cfg(not(test))]
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
