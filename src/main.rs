use space_nova_relay::app::{AppState, create_app, init_tracing};
use space_nova_relay::config::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_tracing();

    info!("Starting Space Nova Backend Server...");

    // A missing credential stops the process before anything is bound
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };
    info!("Configuration loaded: {:?}", config);

    let app = create_app(AppState::from_config(&config));

    let listener = match tokio::net::TcpListener::bind(&config.bind_address()).await {
        Ok(listener) => {
            info!("Listening on: {}", config.server_url());
            info!("Health check: GET /health");
            info!("Ask endpoint: POST /api/ask_gemini");
            listener
        }
        Err(e) => {
            error!("Failed to bind to {}: {}", config.bind_address(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
    info!("Server shutdown gracefully");
}
