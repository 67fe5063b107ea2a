use recsys_api::api::{create_router, AppState};
use recsys_api::config::Config;
use recsys_api::services::loader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recsys_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    // Table-load failures surface once here, before the server accepts
    // requests; they are not retried per request.
    let collaborative = loader::load_from_path(&config.collaborative_table_path).await?;
    let content = loader::load_from_path(&config.content_table_path).await?;

    let state = AppState::new(&config, collaborative, content);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Recommendation service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
