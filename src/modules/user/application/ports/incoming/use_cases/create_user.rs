use async_trait::async_trait;
use std::fmt;

use crate::user::application::domain::entities::User;

const NAME_MAX_LEN: usize = 100;
const USERNAME_MAX_LEN: usize = 50;
const EMAIL_MAX_LEN: usize = 255;

//
// ──────────────────────────────────────────────────────────
// Caller Key
// ──────────────────────────────────────────────────────────
//

/// Identity the create-user throttle counts calls against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerKey(String);

impl CallerKey {
    pub fn for_user(user_id: i32) -> Self {
        Self(format!("user:{user_id}"))
    }

    pub fn for_address(addr: &str) -> Self {
        Self(format!("ip:{addr}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//
// ──────────────────────────────────────────────────────────
// Create User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserCommand {
    first_name: String,
    last_name: String,
    username: String,
    email: String,
    role_id: i32,
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateUserCommandError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must not exceed {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("email is not a valid address")]
    InvalidEmail,

    #[error("roleId must be a positive integer")]
    InvalidRoleId,
}

fn required(
    field: &'static str,
    value: String,
    max: usize,
) -> Result<String, CreateUserCommandError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(CreateUserCommandError::MissingField(field));
    }

    if value.chars().count() > max {
        return Err(CreateUserCommandError::FieldTooLong { field, max });
    }

    Ok(value.to_string())
}

impl CreateUserCommand {
    pub fn new(
        first_name: String,
        last_name: String,
        username: String,
        email: String,
        role_id: String,
        password: Option<String>,
    ) -> Result<Self, CreateUserCommandError> {
        let first_name = required("firstName", first_name, NAME_MAX_LEN)?;
        let last_name = required("lastName", last_name, NAME_MAX_LEN)?;
        let username = required("username", username, USERNAME_MAX_LEN)?;
        let email = required("email", email, EMAIL_MAX_LEN)?;

        if !email_address::EmailAddress::is_valid(&email) {
            return Err(CreateUserCommandError::InvalidEmail);
        }

        let role_id = match role_id.trim() {
            "" => return Err(CreateUserCommandError::MissingField("roleId")),
            raw => match raw.parse::<i32>() {
                Ok(id) if id > 0 => id,
                _ => return Err(CreateUserCommandError::InvalidRoleId),
            },
        };

        let password = password.filter(|p| !p.is_empty());

        Ok(Self {
            first_name,
            last_name,
            username,
            email,
            role_id,
            password,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role_id(&self) -> i32 {
        self.role_id
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateUserError {
    #[error("Invalid input: {0}")]
    Validation(#[from] CreateUserCommandError),

    #[error("Too many requests: {0}")]
    Throttled(String),

    #[error("Configuration unavailable: {0}")]
    Config(String),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: &CallerKey,
        command: CreateUserCommand,
    ) -> Result<User, CreateUserError>;
}
