use async_trait::async_trait;

use crate::user::application::domain::entities::{User, UserChanges, UserId};

const NAME_MAX_LEN: usize = 100;
const MOBILE_MAX_LEN: usize = 20;
const ADDRESS_MAX_LEN: usize = 255;

//
// ──────────────────────────────────────────────────────────
// Update User Command
// ──────────────────────────────────────────────────────────
//

/// Partial profile update for the authenticated user. Blank fields are
/// dropped so they leave the stored value untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateUserCommand {
    user_id: UserId,
    changes: UserChanges,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateUserCommandError {
    #[error("{field} must not exceed {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
}

fn optional(
    field: &'static str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, UpdateUserCommandError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    if value.chars().count() > max {
        return Err(UpdateUserCommandError::FieldTooLong { field, max });
    }

    Ok(Some(value.to_string()))
}

impl UpdateUserCommand {
    pub fn new(
        user_id: UserId,
        first_name: Option<String>,
        last_name: Option<String>,
        mobile: Option<String>,
        address: Option<String>,
    ) -> Result<Self, UpdateUserCommandError> {
        Ok(Self {
            user_id,
            changes: UserChanges {
                first_name: optional("firstName", first_name, NAME_MAX_LEN)?,
                last_name: optional("lastName", last_name, NAME_MAX_LEN)?,
                mobile: optional("mobile", mobile, MOBILE_MAX_LEN)?,
                address: optional("address", address, ADDRESS_MAX_LEN)?,
            },
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn changes(&self) -> &UserChanges {
        &self.changes
    }

    pub fn into_changes(self) -> UserChanges {
        self.changes
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateUserError {
    #[error("Invalid input: {0}")]
    Validation(#[from] UpdateUserCommandError),

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(&self, command: UpdateUserCommand) -> Result<User, UpdateUserError>;
}
