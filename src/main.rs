mod api;
mod common;
mod model;

use clap::Parser;
use common::auth;
use model::arg::Args;
use model::config::Config;

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config_path = args
        .config
        .unwrap_or_else(|| Config::default_config_path().to_string());
    let config = Config::load(&config_path).unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {}", e);
        std::process::exit(1);
    });

    // Get API Key
    // Security check: empty string is treated as not configured, preventing empty key bypass
    let api_key = config
        .api_key
        .clone()
        .filter(|k| !k.trim().is_empty())
        .unwrap_or_else(|| {
            tracing::error!("apiKey not set in config file");
            std::process::exit(1);
        });

    // Build router
    let service = api::NoteService::new(config.max_note_bytes);
    let app = api::create_router(api_key.clone(), service);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting Notely API endpoint: {}", addr);
    tracing::info!("API key fingerprint: {}", auth::key_fingerprint(&api_key));
    tracing::info!("Available APIs:");
    tracing::info!("  GET    /v1/healthz");
    tracing::info!("  GET    /v1/notes");
    tracing::info!("  POST   /v1/notes");
    tracing::info!("  GET    /v1/notes/{{id}}");
    tracing::info!("  DELETE /v1/notes/{{id}}");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
