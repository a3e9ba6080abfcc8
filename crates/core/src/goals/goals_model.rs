//! Goals domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a fitness goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i32,
    pub user_id: i32,
    pub description: Option<String>,
    pub target_value: Option<i32>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
}

/// Input model for setting a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub user_id: i32,
    pub description: Option<String>,
    pub target_value: Option<i32>,
}

impl NewGoal {
    pub fn validate(&self) -> Result<()> {
        if let Some(target) = self.target_value {
            if target < 1 {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Goal target must be at least 1".to_string(),
                )));
            }
        }
        Ok(())
    }
}
