//! Stats module - weekly leaderboard and per-user workout statistics.

mod stats_model;
mod stats_service;
mod stats_traits;

pub use stats_model::{LeaderboardEntry, WeightRange, WorkoutStatistics};
pub use stats_service::StatsService;
pub use stats_traits::{StatsRepositoryTrait, StatsServiceTrait};
