use super::stats_model::{LeaderboardEntry, WeightRange, WorkoutStatistics};
use crate::errors::Result;
use crate::utils::time_utils::WeekWindow;

/// Aggregate queries over workouts and exercises.
///
/// Every method is an independent scalar query. "No rows" is reported as
/// `None` (or zero for counts) and never as an error.
pub trait StatsRepositoryTrait: Send + Sync {
    /// Total duration per user for workouts dated inside `window`.
    ///
    /// Every user appears, with 0 when they have no workout in the window.
    /// Ordered by total descending, then user ID ascending.
    fn leaderboard(&self, window: WeekWindow) -> Result<Vec<LeaderboardEntry>>;

    fn count_workouts(&self, user_id: i32) -> Result<i64>;

    fn total_duration(&self, user_id: i32) -> Result<Option<i64>>;

    fn average_duration(&self, user_id: i32) -> Result<Option<f64>>;

    /// Weight range of `exercise_name` (exact match) across the user's workouts.
    fn exercise_weight_range(&self, user_id: i32, exercise_name: &str) -> Result<WeightRange>;
}

pub trait StatsServiceTrait: Send + Sync {
    /// Leaderboard for the current week.
    fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>>;

    fn leaderboard_for_window(&self, window: WeekWindow) -> Result<Vec<LeaderboardEntry>>;

    /// Statistics with the default tracked exercise.
    fn statistics(&self, user_id: i32) -> Result<WorkoutStatistics>;

    fn statistics_for_exercise(
        &self,
        user_id: i32,
        exercise_name: &str,
    ) -> Result<WorkoutStatistics>;
}
