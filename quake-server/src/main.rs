mod config;
mod domain;
mod inbound;
mod outbound;

use quake_core::{FixtureFeedLoader, HttpFeedLoader, MapOptions, RenderSession};

use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::from_env()?;

    // A minimal tracing middleware for request logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let metrics = outbound::metrics::TracingMetrics;
    let server_config = inbound::HttpServerConfig {
        port: &config.server_port,
    };

    match config.fixture_path {
        Some(ref path) => {
            tracing::info!("serving earthquakes from fixture {}", path.display());
            let loader = FixtureFeedLoader::from_path(path)
                .with_context(|| format!("failed to load fixture {}", path.display()))?;
            let session = RenderSession::new(loader, &config.feed_url, MapOptions::default());
            let map_service = domain::service::Service::new(session, metrics);

            inbound::HttpServer::new(map_service, server_config)
                .await?
                .run()
                .await
        }
        None => {
            let loader = HttpFeedLoader::new().context("failed to build HTTP client")?;
            let session = RenderSession::new(loader, &config.feed_url, MapOptions::default());
            let map_service = domain::service::Service::new(session, metrics);

            inbound::HttpServer::new(map_service, server_config)
                .await?
                .run()
                .await
        }
    }
}
