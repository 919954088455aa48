use axum::{extract::State, Json};
use serde::Serialize;

use super::users::UsersState;
use crate::error::Result;
use crate::version::GIT_VERSION;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    git_version: &'static str,
    users: usize,
}

/// Liveness probe. Reading the user count also proves the store lock is
/// still usable.
pub async fn health_check(State(state): State<UsersState>) -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok",
        git_version: GIT_VERSION,
        users: state.user_repo.count()?,
    }))
}
