use async_graphql::{InputObject, SimpleObject, ID};
use chrono::{DateTime, Utc};

use crate::user::application::domain::entities::{User, UserId};

/// Public view of a user. The password hash and session token never leave
/// the service; timestamps are unix seconds.
#[derive(SimpleObject, Debug, Clone, PartialEq)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: ID,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub active: Option<bool>,
    pub last_login: Option<i64>,
    pub last_password_change: Option<i64>,
    pub role_id: Option<i32>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
    pub deleted_at: Option<i64>,
}

fn unix(t: Option<DateTime<Utc>>) -> Option<i64> {
    t.map(|t| t.timestamp())
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self {
            id: ID(user.id.to_string()),
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            email: user.email,
            mobile: user.mobile,
            address: user.address,
            active: user.active,
            last_login: unix(user.last_login),
            last_password_change: unix(user.last_password_change),
            role_id: user.role_id,
            created_at: unix(user.created_at),
            updated_at: unix(user.updated_at),
            deleted_at: unix(user.deleted_at),
        }
    }
}

#[derive(InputObject, Debug, Clone)]
pub struct UserCreateInput {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub role_id: ID,
    pub password: Option<String>,
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct UserUpdateInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
}

#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub struct UserDeletePayload {
    pub id: ID,
}

impl From<UserId> for UserDeletePayload {
    fn from(id: UserId) -> Self {
        Self {
            id: ID(id.to_string()),
        }
    }
}
