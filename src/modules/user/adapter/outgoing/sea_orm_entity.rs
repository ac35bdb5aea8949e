use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::user::application::domain::entities::{User, UserId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub active: Option<bool>,
    pub last_login: Option<DateTimeWithTimeZone>,
    pub last_password_change: Option<DateTimeWithTimeZone>,
    #[sea_orm(column_type = "Text", nullable)]
    pub token: Option<String>,
    pub role_id: Option<i32>,
    pub created_at: Option<DateTimeWithTimeZone>,
    pub updated_at: Option<DateTimeWithTimeZone>,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

impl Model {
    pub fn to_domain(&self) -> User {
        let utc = |t: &Option<DateTimeWithTimeZone>| t.map(|t| t.with_timezone(&Utc));

        User {
            id: UserId::from(self.id),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            address: self.address.clone(),
            active: self.active,
            last_login: utc(&self.last_login),
            last_password_change: utc(&self.last_password_change),
            token: self.token.clone(),
            role_id: self.role_id,
            created_at: utc(&self.created_at),
            updated_at: utc(&self.updated_at),
            deleted_at: utc(&self.deleted_at),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
