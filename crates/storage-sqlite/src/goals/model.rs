//! Database models for goals.

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use fittrack_core::goals::{Goal, NewGoal};

/// Database model for goals
#[derive(
    Queryable,
    Identifiable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalDB {
    pub id: i32,
    pub user_id: i32,
    pub goal_description: Option<String>,
    pub target_value: Option<i32>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
}

/// Database model for creating a new goal
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
pub struct NewGoalDB {
    pub user_id: i32,
    pub goal_description: Option<String>,
    pub target_value: Option<i32>,
    pub start_date: NaiveDate,
    pub is_active: bool,
}

impl NewGoalDB {
    /// An active goal starting on `start_date`.
    pub fn active_from(domain: NewGoal, start_date: NaiveDate) -> Self {
        Self {
            user_id: domain.user_id,
            goal_description: domain.description,
            target_value: domain.target_value,
            start_date,
            is_active: true,
        }
    }
}

impl From<GoalDB> for Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            description: db.goal_description,
            target_value: db.target_value,
            start_date: db.start_date,
            end_date: db.end_date,
            is_active: db.is_active,
        }
    }
}
