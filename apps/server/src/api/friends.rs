use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use fittrack_core::users::UserSummary;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddFriendRequest {
    friend_id: i32,
}

async fn list_friends(
    Path(user_id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<UserSummary>>> {
    let friends = state.friend_service.list_friends(user_id)?;
    Ok(Json(friends))
}

async fn friend_candidates(
    Path(user_id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<UserSummary>>> {
    let candidates = state.friend_service.friend_candidates(user_id)?;
    Ok(Json(candidates))
}

async fn add_friend(
    Path(user_id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddFriendRequest>,
) -> ApiResult<StatusCode> {
    state
        .friend_service
        .add_friend(user_id, req.friend_id)
        .await?;
    Ok(StatusCode::CREATED)
}

async fn remove_friend(
    Path((user_id, friend_id)): Path<(i32, i32)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    match state
        .friend_service
        .remove_friend(user_id, friend_id)
        .await?
    {
        0 => Err(ApiError::NotFound),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/{id}/friends", get(list_friends).post(add_friend))
        .route("/users/{id}/friends/candidates", get(friend_candidates))
        .route("/users/{id}/friends/{friend_id}", delete(remove_friend))
}
