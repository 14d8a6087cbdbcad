use crate::domain::ports::RenderMetrics;

/// Reports render outcomes as tracing events.
#[derive(Debug, Clone)]
pub struct TracingMetrics;

impl RenderMetrics for TracingMetrics {
    async fn record_render_success(&self) {
        tracing::info!(outcome = "success", "earthquake map rendered");
    }

    async fn record_render_failure(&self) {
        tracing::warn!(outcome = "failure", "earthquake map render aborted");
    }
}
