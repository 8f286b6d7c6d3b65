use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bike_server::config::{DatasetLocation, ServerConfig};
use bike_server::stations::{
    CachedStationSource, FileStationSource, StationClient, StationClientConfig, StationSource,
};
use bike_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bike_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(2);
        }
    };

    // Pick the dataset source
    let source: Arc<dyn StationSource> = match &config.dataset {
        DatasetLocation::File(path) => {
            tracing::info!(path = %path.display(), "reading stations from file");
            Arc::new(FileStationSource::new(path))
        }
        DatasetLocation::Url(url) => {
            let client = StationClient::new(StationClientConfig::new(url))
                .expect("Failed to create station client");
            tracing::info!(url = client.url(), "fetching stations over HTTP");
            Arc::new(client)
        }
    };
    let stations = CachedStationSource::new(source, &config.cache);

    // Fail fast if the dataset is unreadable
    match stations.load().await {
        Ok(table) => tracing::info!(stations = table.len(), "loaded station table"),
        Err(e) => {
            tracing::error!("failed to load stations: {e}");
            std::process::exit(1);
        }
    }

    let state = AppState::new(stations, config.nearby.clone());
    let app = create_router(state);

    let addr = config.bind_addr;
    tracing::info!("Bike station finder listening on http://{addr}");
    tracing::info!("  GET  /health  - Health check");
    tracing::info!("  GET  /nearby  - Nearest stations (JSON or HTML)");
    tracing::info!("  POST /reply   - Reply text for a location message");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
