use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use fittrack_core::stats::{LeaderboardEntry, WorkoutStatistics};
use serde::Deserialize;

#[derive(Deserialize)]
struct StatisticsQuery {
    exercise: Option<String>,
}

async fn leaderboard(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let board = state.stats_service.leaderboard()?;
    Ok(Json(board))
}

async fn statistics(
    Path(user_id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Query(q): Query<StatisticsQuery>,
) -> ApiResult<Json<WorkoutStatistics>> {
    let stats = match q.exercise.as_deref() {
        None => state.stats_service.statistics(user_id)?,
        Some(name) if name.trim().is_empty() => {
            return Err(ApiError::BadRequest(
                "exercise must not be blank".to_string(),
            ))
        }
        // Matched exactly as given.
        Some(name) => state
            .stats_service
            .statistics_for_exercise(user_id, name)?,
    };
    Ok(Json(stats))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/leaderboard", get(leaderboard))
        .route("/users/{id}/statistics", get(statistics))
}
