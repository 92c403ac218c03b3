use fanhub::config::load_config;
use fanhub::hub::Hub;
use fanhub::transport::websocket::start_websocket_server;
use fanhub::utils::logging;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    logging::init("info");

    let settings = load_config().expect("Failed to load configuration");
    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    let hub = Hub::start(&settings.hub);

    tokio::select! {
        _ = start_websocket_server(addr, hub, settings.clone()) => {
            error!("WebSocket server exited unexpectedly.");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received. Exiting gracefully.");
        }
    }
}
