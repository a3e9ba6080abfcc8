//! Database models for users.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use fittrack_core::users::{NewUser, User, UserProfileUpdate, UserSummary};

/// Database model for users
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct UserDB {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub weight_kg: Option<f64>,
}

/// `{ id, name }` projection of a user row
#[derive(Queryable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserSummaryDB {
    pub id: i32,
    pub name: String,
}

/// Database model for inserting a user
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub name: String,
    pub email: String,
    pub weight_kg: Option<f64>,
}

/// Full replacement of the editable profile columns. A `None` weight clears it.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(treat_none_as_null = true)]
pub struct UserProfileChangeset {
    pub name: String,
    pub email: String,
    pub weight_kg: Option<f64>,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            weight_kg: db.weight_kg,
        }
    }
}

impl From<UserSummaryDB> for UserSummary {
    fn from(db: UserSummaryDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
        }
    }
}

impl From<NewUser> for NewUserDB {
    fn from(domain: NewUser) -> Self {
        Self {
            name: domain.name.trim().to_string(),
            email: domain.email.trim().to_string(),
            weight_kg: domain.weight_kg,
        }
    }
}

impl From<UserProfileUpdate> for UserProfileChangeset {
    fn from(domain: UserProfileUpdate) -> Self {
        Self {
            name: domain.name.trim().to_string(),
            email: domain.email.trim().to_string(),
            weight_kg: domain.weight_kg,
        }
    }
}
