/*!
   Module `session` runs a single render pass from the feed to a finished map.
*/

use crate::{
    encoding::DEPTH_BANDS,
    error::FetchError,
    feed::FeedLoader,
    marker::{MarkerDescriptor, transform_features},
    presenter::{MapOptions, MapPresenter},
};

use tracing::{Instrument, Level, debug, error, span};
use uuid::Uuid;

/// Everything one render pass needs. The pass awaits the feed once, then transforms,
/// overlays, composes and draws the legend in that order.
#[derive(Debug, Clone)]
pub struct RenderSession<L>
where
    L: FeedLoader,
{
    loader: L,
    feed_url: String,
    options: MapOptions,
}

impl<L> RenderSession<L>
where
    L: FeedLoader,
{
    pub fn new(loader: L, feed_url: impl Into<String>, options: MapOptions) -> Self {
        Self {
            loader,
            feed_url: feed_url.into(),
            options,
        }
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Fetches the feed and transforms every feature, without drawing anything.
    ///
    /// # Errors
    ///
    /// - Propagates the [FetchError] of the loader. Nothing is retried.
    pub async fn markers(&self) -> Result<Vec<MarkerDescriptor>, FetchError> {
        let features = self
            .loader
            .fetch_features(&self.feed_url)
            .await
            .inspect_err(|e| error!(url = %self.feed_url, "failed to load earthquake feed: {e}"))?;

        debug!(count = features.len(), "loaded earthquake features");

        Ok(transform_features(&features))
    }

    /// Runs the whole pass and returns what `presenter` produced.
    ///
    /// # Errors
    ///
    /// - Propagates the [FetchError] of the loader; the presenter is not touched then.
    pub async fn run<P>(&self, mut presenter: P) -> Result<P::Output, FetchError>
    where
        P: MapPresenter,
    {
        let span = span!(Level::DEBUG, "render_session", id = %Uuid::new_v4());

        let markers = self.markers().instrument(span.clone()).await?;

        let _guard = span.enter();

        let overlay = presenter.render_overlay(&markers);
        presenter.compose_layers(&self.options.base_layers, overlay);
        presenter.render_legend(&DEPTH_BANDS);

        debug!(markers = markers.len(), "render pass complete");

        Ok(presenter.finish())
    }
}
