//! Aggregate read queries: weekly leaderboard and per-user statistics.

mod repository;

pub use repository::StatsRepository;
