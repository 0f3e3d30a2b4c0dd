use anyhow::Context;
use toml::{map::Map, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config("config.toml").unwrap_or_default();

    let db_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => config
            .get("database")
            .and_then(|v| v.get("url"))
            .and_then(|v| v.as_str())
            .unwrap_or("sqlite://encore.db?mode=rwc")
            .to_string(),
    };

    let bind = config
        .get("server")
        .and_then(|v| v.get("bind"))
        .and_then(|v| v.as_str())
        .unwrap_or("0.0.0.0:5000")
        .to_string();

    let repository = repository::init_repository(&db_url).await?;

    let router = api::serve(repository).await?;

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;

    info!(addr = %bind, "encore listening");

    axum::serve(listener, router).await?;

    Ok(())
}

fn load_config(config_name: &str) -> Option<Map<String, Value>> {
    let config = std::fs::read_to_string(config_name).ok()?;
    toml::from_str::<Map<String, Value>>(&config).ok()
}
