use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use fittrack_core::goals::{Goal, NewGoal};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetGoalRequest {
    description: Option<String>,
    target_value: Option<i32>,
}

async fn get_goals(
    Path(user_id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.get_goals(user_id)?;
    Ok(Json(goals))
}

async fn get_active_goal(
    Path(user_id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Option<Goal>>> {
    let goal = state.goal_service.get_active_goal(user_id)?;
    Ok(Json(goal))
}

async fn set_goal(
    Path(user_id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetGoalRequest>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let goal = state
        .goal_service
        .set_goal(NewGoal {
            user_id,
            description: req.description,
            target_value: req.target_value,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/{id}/goals", get(get_goals).post(set_goal))
        .route("/users/{id}/goals/active", get(get_active_goal))
}
