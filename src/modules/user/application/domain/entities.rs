use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Identifier of a `users` row. Assigned by the database on insert and never
/// changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(i32);

impl UserId {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<UserId> for i32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub active: Option<bool>,
    pub last_login: Option<DateTime<Utc>>,
    pub last_password_change: Option<DateTime<Utc>>,
    pub token: Option<String>,
    pub role_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Row data for an insert. Timestamps are stamped by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub role_id: i32,
    pub password_hash: Option<String>,
}

/// Columns touched by a partial update. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
}

/// How `deleteUser` removes a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteStrategy {
    /// `DELETE FROM users WHERE id = $1`
    #[default]
    Hard,
    /// Keep the row and stamp `deleted_at`.
    Soft,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown delete strategy '{0}', expected 'hard' or 'soft'")]
pub struct ParseDeleteStrategyError(pub String);

impl FromStr for DeleteStrategy {
    type Err = ParseDeleteStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hard" => Ok(DeleteStrategy::Hard),
            "soft" => Ok(DeleteStrategy::Soft),
            other => Err(ParseDeleteStrategyError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_strategy_parses_case_insensitively() {
        assert_eq!("HARD".parse::<DeleteStrategy>(), Ok(DeleteStrategy::Hard));
        assert_eq!(" soft ".parse::<DeleteStrategy>(), Ok(DeleteStrategy::Soft));
    }

    #[test]
    fn test_delete_strategy_rejects_unknown_value() {
        let err = "archive".parse::<DeleteStrategy>().unwrap_err();
        assert_eq!(err, ParseDeleteStrategyError("archive".to_string()));
    }

    #[test]
    fn test_user_id_round_trips_through_i32() {
        let id = UserId::from(42);
        assert_eq!(id.value(), 42);
        assert_eq!(i32::from(id), 42);
        assert_eq!(id.to_string(), "42");
    }
}
