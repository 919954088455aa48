use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exercise_tracker::config::Config;
use exercise_tracker::handlers::{exercises, users};
use exercise_tracker::repositories::UserRepository;
use exercise_tracker::routes;
use exercise_tracker::version::GIT_VERSION;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before reading RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "exercise_tracker=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    // All data lives in this repository and is dropped on shutdown
    let user_repo = UserRepository::new();

    let users_state = users::UsersState {
        user_repo: user_repo.clone(),
    };
    let exercises_state = exercises::ExercisesState { user_repo };

    let app = routes::create_router(users_state, exercises_state, &config);

    let addr = config.server_addr();
    tracing::info!(version = GIT_VERSION, "Starting server at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
