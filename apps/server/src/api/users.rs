use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use fittrack_core::users::{NewUser, User, UserProfileUpdate, UserSummary};
use serde::Deserialize;

#[derive(Deserialize)]
struct ListUsersQuery {
    exclude: Option<i32>,
}

async fn get_profile(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.get_profile(id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(user))
}

async fn update_profile(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<UserProfileUpdate>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.update_profile(id, update).await?;
    Ok(Json(user))
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(new_user): Json<NewUser>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = state.user_service.create_user(new_user).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ListUsersQuery>,
) -> ApiResult<Json<Vec<UserSummary>>> {
    // IDs start at 1, so 0 excludes nobody.
    let users = state.user_service.list_users(q.exclude.unwrap_or(0))?;
    Ok(Json(users))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_profile).put(update_profile))
}
