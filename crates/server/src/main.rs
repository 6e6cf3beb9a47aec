use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file early for environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,movies_api_server=debug,movies_api_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    movies_api_server::start_server().await
}
