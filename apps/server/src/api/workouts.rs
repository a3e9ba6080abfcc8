use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use fittrack_core::workouts::{Exercise, Workout, WorkoutDraft};

async fn log_workout(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<WorkoutDraft>,
) -> ApiResult<(StatusCode, Json<Workout>)> {
    let workout = state.workout_service.log_draft(draft).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

async fn list_workouts(
    Path(user_id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Workout>>> {
    let workouts = state.workout_service.list_workouts(user_id)?;
    Ok(Json(workouts))
}

async fn get_workout_details(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Exercise>>> {
    let exercises = state.workout_service.get_workout_details(id)?;
    Ok(Json(exercises))
}

async fn delete_workout(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    match state.workout_service.delete_workout(id).await? {
        0 => Err(ApiError::NotFound),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/workouts", post(log_workout))
        .route("/workouts/{id}", delete(delete_workout))
        .route("/workouts/{id}/exercises", get(get_workout_details))
        .route("/users/{id}/workouts", get(list_workouts))
}
