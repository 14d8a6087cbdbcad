/*!
   Module `inbound` exposes the earthquake map over HTTP.
*/

mod api;
mod handlers;

use crate::domain::ports::QuakeMapService;

use std::sync::Arc;

use anyhow::Context;
use axum::{Router, routing::get};
use tokio::net;

/// Configuration for the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpServerConfig<'a> {
    pub port: &'a str,
}

#[derive(Debug, Clone)]
/// The global application state shared between all request handlers.
pub(crate) struct AppState<QS: QuakeMapService> {
    map_service: Arc<QS>,
}

/// The application's HTTP server. The underlying HTTP package is opaque to module consumers.
pub struct HttpServer {
    router: Router,
    listener: net::TcpListener,
}

impl HttpServer {
    /// Returns a new HTTP server bound to the port specified in `config`.
    pub async fn new<QS: QuakeMapService>(
        map_service: QS,
        config: HttpServerConfig<'_>,
    ) -> anyhow::Result<Self> {
        let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
            |request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                tracing::info_span!("http_request", method = ?request.method(), uri)
            },
        );

        // Construct dependencies to inject into handlers.
        let state = AppState {
            map_service: Arc::new(map_service),
        };

        let router = Router::new()
            .route("/", get(handlers::map_page_handler::<QS>))
            .route("/map.svg", get(handlers::map_snapshot_handler::<QS>))
            .nest("/api", api_routes::<QS>())
            .layer(trace_layer)
            .with_state(state);

        let listener = net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
            .await
            .with_context(|| format!("failed to listen on {}", config.port))?;

        Ok(Self { router, listener })
    }

    /// Runs the HTTP server.
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self
            .listener
            .local_addr()
            .context("failed to read listener address")?;
        tracing::debug!("listening on {}", addr);

        axum::serve(self.listener, self.router)
            .await
            .context("received error from running server")?;

        Ok(())
    }
}

fn api_routes<QS: QuakeMapService>() -> Router<AppState<QS>> {
    Router::new()
        .route("/markers", get(handlers::markers_handler::<QS>))
        .route("/legend", get(handlers::legend_handler::<QS>))
}
