use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::extract::{FormOrJson, QueryParams};
use crate::models::{CreateExercise, ExerciseAdded, ExerciseLog, LogFilter, LogParams};
use crate::repositories::UserRepository;

#[derive(Clone)]
pub struct ExercisesState {
    pub user_repo: UserRepository,
}

pub async fn create(
    State(state): State<ExercisesState>,
    Path(user_id): Path<String>,
    FormOrJson(form): FormOrJson<CreateExercise>,
) -> Result<Json<ExerciseAdded>> {
    let exercise = form.validate()?;
    let added = state.user_repo.add_exercise(&user_id, exercise)?;

    Ok(Json(added))
}

pub async fn log(
    State(state): State<ExercisesState>,
    Path(user_id): Path<String>,
    QueryParams(params): QueryParams<LogParams>,
) -> Result<Json<ExerciseLog>> {
    let filter = LogFilter::from_params(&params);
    tracing::debug!(%user_id, ?filter, "fetching exercise log");

    let log = state.user_repo.log(&user_id, &filter)?;
    Ok(Json(log))
}
