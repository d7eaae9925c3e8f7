use fitplan::api::routes::create_routes;
use fitplan::config::{AppConfig, DatabaseConfig};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;
    let pool = db_config.create_pool().await?;

    sqlx::migrate!().run(&pool).await?;

    let app = create_routes(pool, &config.jwt_secret);

    let listener = TcpListener::bind(config.server_address()).await?;
    info!("fitplan server starting on http://{}", config.server_address());
    info!("Health check available at http://{}/health", config.server_address());

    axum::serve(listener, app).await?;

    Ok(())
}
