use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sous_chef::{
    config::Config, routes, services::gemini::GeminiClient, state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sous_chef=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("failed to load configuration")?;

    let client = GeminiClient::new(&config.gemini).context("failed to build Gemini client")?;
    client
        .verify()
        .await
        .with_context(|| format!("could not configure Gemini model '{}'", client.model()))?;
    tracing::info!(model = client.model(), "Gemini API configured successfully");

    let state = Arc::new(AppState::new(Arc::new(client)));
    let app = routes::create_router(&config.server.static_dir).with_state(state);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("🚀 Sous-Chef running at http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
