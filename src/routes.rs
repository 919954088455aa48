use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::handlers::{exercises, health, users};

pub fn create_router(
    users_state: users::UsersState,
    exercises_state: exercises::ExercisesState,
    config: &Config,
) -> Router {
    Router::new()
        // Users
        .route("/api/users", get(users::list).post(users::create))
        .route("/health", get(health::health_check))
        .with_state(users_state)
        // Exercises and logs
        .route("/api/users/{id}/exercises", post(exercises::create))
        .route("/api/users/{id}/logs", get(exercises::log))
        .with_state(exercises_state)
        // Landing page and static assets
        .route_service("/", ServeFile::new(config.index_page()))
        .nest_service("/public", ServeDir::new(&config.public_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
