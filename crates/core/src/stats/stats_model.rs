//! Aggregate models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the weekly leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: i32,
    pub name: String,
    pub total_minutes: i64,
}

/// Raw MIN/MAX weight of one exercise; both `None` when nothing was recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightRange {
    pub min_weight_kg: Option<f64>,
    pub max_weight_kg: Option<f64>,
}

/// Per-user aggregates with "no rows" already replaced by zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStatistics {
    pub total_workouts: i64,
    pub total_duration: i64,
    pub avg_duration: Decimal,
    pub tracked_exercise: String,
    pub min_weight_kg: f64,
    pub max_weight_kg: f64,
}

impl WorkoutStatistics {
    pub fn empty(tracked_exercise: &str) -> Self {
        Self {
            total_workouts: 0,
            total_duration: 0,
            avg_duration: Decimal::ZERO,
            tracked_exercise: tracked_exercise.to_string(),
            min_weight_kg: 0.0,
            max_weight_kg: 0.0,
        }
    }
}
