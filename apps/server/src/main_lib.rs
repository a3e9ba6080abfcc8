use std::sync::Arc;

use crate::config::Config;
use fittrack_core::{
    friends::{FriendService, FriendServiceTrait},
    goals::{GoalService, GoalServiceTrait},
    stats::{StatsService, StatsServiceTrait},
    users::{UserService, UserServiceTrait},
    utils::time_utils::local_today,
    workouts::{WorkoutService, WorkoutServiceTrait},
};
use fittrack_storage_sqlite::{
    db::{self, write_actor},
    friends::FriendRepository,
    goals::GoalRepository,
    seed::seed_demo_data,
    stats::StatsRepository,
    users::UserRepository,
    workouts::WorkoutRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub workout_service: Arc<dyn WorkoutServiceTrait + Send + Sync>,
    pub friend_service: Arc<dyn FriendServiceTrait + Send + Sync>,
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub stats_service: Arc<dyn StatsServiceTrait + Send + Sync>,
}

/// Installs the global subscriber. Library `log` records are forwarded into it.
pub fn init_tracing() {
    let log_format = std::env::var("FT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    if config.seed_demo {
        let seeded = seed_demo_data(&writer, local_today()).await?;
        if !seeded {
            tracing::debug!("Database already populated, demo seed skipped");
        }
    }

    let user_repo = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let workout_repo = Arc::new(WorkoutRepository::new(pool.clone(), writer.clone()));
    let friend_repo = Arc::new(FriendRepository::new(pool.clone(), writer.clone()));
    let goal_repo = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let stats_repo = Arc::new(StatsRepository::new(pool.clone()));

    let user_service = Arc::new(UserService::new(user_repo.clone()));
    let workout_service = Arc::new(WorkoutService::new(workout_repo));
    let friend_service = Arc::new(FriendService::new(friend_repo, user_repo));
    let goal_service = Arc::new(GoalService::new(goal_repo));
    let stats_service = Arc::new(StatsService::new(stats_repo));

    Ok(Arc::new(AppState {
        user_service,
        workout_service,
        friend_service,
        goal_service,
        stats_service,
    }))
}
