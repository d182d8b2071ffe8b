use mxrp_dashboard::{config::Config, router, startup, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client();
    let oauth_client = startup::setup_oauth_client(&config)?;
    let discord_http = startup::setup_discord_http(&config);
    let role_cache = startup::setup_role_config_cache();

    tracing::info!("Starting server on {}", config.bind_addr);

    let state = AppState::new(
        db,
        http_client,
        oauth_client,
        discord_http,
        role_cache,
        config.news_webhook_url.clone(),
    );

    let app = router::router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
