/*
   Module `ports` specifies the API by which external modules interact with the earthquake map
   domain.

   All traits are bounded by `Send + Sync + 'static`, since their implementations must be shareable
   between request-handling threads.

   Trait methods are explicitly asynchronous, including `Send` bounds on response types,
   since the application is expected to always run in a multithreaded environment.
*/

use std::future::Future;

use quake_core::{LegendRow, MarkerDescriptor};

use crate::domain::models::*;

/// `QuakeMapService` is the public API for the earthquake map domain.
///
/// Every call runs its own render pass against the feed; nothing is cached between calls.
pub trait QuakeMapService: Clone + Send + Sync + 'static {
    /// Asynchronously render the interactive [MapPage].
    ///
    /// # Errors
    ///
    /// - [RenderMapError::Feed] if the feed could not be loaded.
    fn render_page(&self) -> impl Future<Output = Result<MapPage, RenderMapError>> + Send;

    /// Asynchronously render a static [MapSnapshot].
    ///
    /// # Errors
    ///
    /// - [RenderMapError::Feed] if the feed could not be loaded.
    fn render_snapshot(&self) -> impl Future<Output = Result<MapSnapshot, RenderMapError>> + Send;

    /// Asynchronously load the feed and describe its markers.
    fn markers(
        &self,
    ) -> impl Future<Output = Result<Vec<MarkerDescriptor>, RenderMapError>> + Send;

    /// The legend rows every rendered map carries.
    fn legend(&self) -> Vec<LegendRow>;
}

/// `RenderMetrics` describes an aggregator of render pass related metrics.
pub trait RenderMetrics: Send + Sync + Clone + 'static {
    /// Record a completed render pass.
    fn record_render_success(&self) -> impl Future<Output = ()> + Send;

    /// Record a render pass aborted by the feed.
    fn record_render_failure(&self) -> impl Future<Output = ()> + Send;
}
