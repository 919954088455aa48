#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use exercise_tracker::config::Config;
use exercise_tracker::handlers::{exercises, users};
use exercise_tracker::models::UserSummary;
use exercise_tracker::repositories::UserRepository;

pub struct TestApp {
    pub router: Router,
    pub user_repo: UserRepository,
}

pub fn create_test_app() -> TestApp {
    let user_repo = UserRepository::new();

    let users_state = users::UsersState {
        user_repo: user_repo.clone(),
    };
    let exercises_state = exercises::ExercisesState {
        user_repo: user_repo.clone(),
    };

    let config = Config::from_env();
    let router = exercise_tracker::routes::create_router(users_state, exercises_state, &config);

    TestApp { router, user_repo }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send a request and decode the JSON response body.
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

pub fn create_test_user(app: &TestApp, username: &str) -> UserSummary {
    app.user_repo.create(username).unwrap()
}

pub async fn add_test_exercise(
    app: &TestApp,
    user_id: &str,
    description: &str,
    duration: i64,
    date: &str,
) -> Value {
    let (status, body) = send(
        &app.router,
        post_form(
            &format!("/api/users/{}/exercises", user_id),
            &format!(
                "description={}&duration={}&date={}",
                description, duration, date
            ),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}
