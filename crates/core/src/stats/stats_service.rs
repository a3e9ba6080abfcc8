use log::debug;
use num_traits::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Arc;

use super::stats_model::{LeaderboardEntry, WorkoutStatistics};
use super::stats_traits::{StatsRepositoryTrait, StatsServiceTrait};
use crate::constants::{DEFAULT_TRACKED_EXERCISE, DISPLAY_DECIMAL_PRECISION};
use crate::errors::Result;
use crate::utils::time_utils::{local_today, WeekWindow};

pub struct StatsService {
    repository: Arc<dyn StatsRepositoryTrait>,
}

impl StatsService {
    pub fn new(repository: Arc<dyn StatsRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn round_average(avg: f64) -> Decimal {
        Decimal::from_f64(avg)
            .map(|d| {
                d.round_dp_with_strategy(
                    DISPLAY_DECIMAL_PRECISION,
                    RoundingStrategy::MidpointAwayFromZero,
                )
            })
            .unwrap_or(Decimal::ZERO)
    }
}

impl StatsServiceTrait for StatsService {
    fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        self.leaderboard_for_window(WeekWindow::current(local_today()))
    }

    fn leaderboard_for_window(&self, window: WeekWindow) -> Result<Vec<LeaderboardEntry>> {
        debug!("Computing leaderboard for {} .. {}", window.start, window.end);
        self.repository.leaderboard(window)
    }

    fn statistics(&self, user_id: i32) -> Result<WorkoutStatistics> {
        self.statistics_for_exercise(user_id, DEFAULT_TRACKED_EXERCISE)
    }

    fn statistics_for_exercise(
        &self,
        user_id: i32,
        exercise_name: &str,
    ) -> Result<WorkoutStatistics> {
        let total_workouts = self.repository.count_workouts(user_id)?;
        let total_duration = self.repository.total_duration(user_id)?.unwrap_or(0);
        let avg_duration = self
            .repository
            .average_duration(user_id)?
            .map(Self::round_average)
            .unwrap_or(Decimal::ZERO);
        let range = self
            .repository
            .exercise_weight_range(user_id, exercise_name)?;

        Ok(WorkoutStatistics {
            total_workouts,
            total_duration,
            avg_duration,
            tracked_exercise: exercise_name.to_string(),
            min_weight_kg: range.min_weight_kg.unwrap_or(0.0),
            max_weight_kg: range.max_weight_kg.unwrap_or(0.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::WeightRange;
    use rust_decimal_macros::dec;

    struct MockStatsRepository {
        count: i64,
        total: Option<i64>,
        avg: Option<f64>,
        range: WeightRange,
    }

    impl StatsRepositoryTrait for MockStatsRepository {
        fn leaderboard(&self, _window: WeekWindow) -> Result<Vec<LeaderboardEntry>> {
            Ok(vec![])
        }

        fn count_workouts(&self, _user_id: i32) -> Result<i64> {
            Ok(self.count)
        }

        fn total_duration(&self, _user_id: i32) -> Result<Option<i64>> {
            Ok(self.total)
        }

        fn average_duration(&self, _user_id: i32) -> Result<Option<f64>> {
            Ok(self.avg)
        }

        fn exercise_weight_range(
            &self,
            _user_id: i32,
            _exercise_name: &str,
        ) -> Result<WeightRange> {
            Ok(self.range)
        }
    }

    #[test]
    fn test_statistics_without_workouts_are_zero() {
        let service = StatsService::new(Arc::new(MockStatsRepository {
            count: 0,
            total: None,
            avg: None,
            range: WeightRange::default(),
        }));

        let stats = service.statistics(3).unwrap();
        assert_eq!(stats, WorkoutStatistics::empty("Bench Press"));
    }

    #[test]
    fn test_statistics_round_average_to_two_places() {
        let service = StatsService::new(Arc::new(MockStatsRepository {
            count: 3,
            total: Some(170),
            avg: Some(170.0 / 3.0),
            range: WeightRange {
                min_weight_kg: Some(50.0),
                max_weight_kg: Some(52.5),
            },
        }));

        let stats = service.statistics_for_exercise(1, "Bench Press").unwrap();
        assert_eq!(stats.total_workouts, 3);
        assert_eq!(stats.total_duration, 170);
        assert_eq!(stats.avg_duration, dec!(56.67));
        assert_eq!(stats.min_weight_kg, 50.0);
        assert_eq!(stats.max_weight_kg, 52.5);
    }

    #[test]
    fn test_round_average_half_up() {
        assert_eq!(StatsService::round_average(57.5), dec!(57.50));
        assert_eq!(StatsService::round_average(0.125), dec!(0.13));
    }
}
