use chrono::{TimeZone, Utc};

use crate::user::adapter::outgoing::sea_orm_entity::Model as UserModel;
use crate::user::application::domain::entities::User;

/// A live `users` row as Postgres would return it.
pub fn sample_user_model(id: i32) -> UserModel {
    let created = Utc
        .with_ymd_and_hms(2024, 1, 15, 8, 30, 0)
        .unwrap()
        .fixed_offset();

    UserModel {
        id,
        first_name: Some("Mohammed".to_string()),
        last_name: Some("Ali".to_string()),
        username: Some("mac".to_string()),
        password: None,
        email: Some("mac@wednesday.is".to_string()),
        mobile: Some("+6281234567".to_string()),
        address: Some("Jl. Sudirman 1".to_string()),
        active: Some(true),
        last_login: None,
        last_password_change: None,
        token: None,
        role_id: Some(1),
        created_at: Some(created),
        updated_at: Some(created),
        deleted_at: None,
    }
}

pub fn sample_user(id: i32) -> User {
    sample_user_model(id).to_domain()
}
