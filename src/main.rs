use axum::routing::post;
use axum::Router;
use tracing_subscriber::EnvFilter;

use course_recommend::api;
use course_recommend::config::Config;
use course_recommend::corpus::csv::load_catalogue;
use course_recommend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Course catalogue: {}", config.csv_path.display());

    let catalogue = load_catalogue(&config.csv_path)?;
    tracing::info!("Loaded {} courses", catalogue.len());
    if config.database_url.is_none() {
        tracing::warn!("No database configured; /recommend-courses will return 503");
    }

    let state = AppState::new(config.clone(), catalogue);

    let app = Router::new()
        .route("/recommend", post(api::recommend::recommend_single))
        .route("/recommend/multiple", post(api::recommend::recommend_multiple))
        .route(
            "/recommend/multiple/random",
            post(api::recommend::recommend_multiple_random),
        )
        .route("/recommend-courses", post(api::recommend::recommend_for_job))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
