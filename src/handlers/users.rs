use axum::{extract::State, http::StatusCode, Json};

use crate::error::Result;
use crate::extract::FormOrJson;
use crate::models::{CreateUser, UserSummary};
use crate::repositories::UserRepository;

#[derive(Clone)]
pub struct UsersState {
    pub user_repo: UserRepository,
}

pub async fn create(
    State(state): State<UsersState>,
    FormOrJson(form): FormOrJson<CreateUser>,
) -> Result<(StatusCode, Json<UserSummary>)> {
    let username = form.validate()?;
    let user = state.user_repo.create(&username)?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn list(State(state): State<UsersState>) -> Result<Json<Vec<UserSummary>>> {
    let users = state.user_repo.find_all()?;
    Ok(Json(users))
}
