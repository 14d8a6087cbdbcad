/*!
   Module `service` provides the canonical implementation of the [QuakeMapService] port.
*/

use quake_core::{
    DEPTH_BANDS, FeedLoader, LeafletPresenter, LegendRow, MarkerDescriptor, RenderSession,
    SvgPresenter, legend_rows,
};

use super::{
    models::{MapPage, MapSnapshot, RenderMapError},
    ports::{QuakeMapService, RenderMetrics},
};

/// Canonical implementation of the [QuakeMapService] port, through which the earthquake map
/// domain API is consumed.
#[derive(Debug, Clone)]
pub struct Service<L, M>
where
    L: FeedLoader,
    M: RenderMetrics,
{
    session: RenderSession<L>,
    metrics: M,
}

impl<L, M> Service<L, M>
where
    L: FeedLoader,
    M: RenderMetrics,
{
    pub fn new(session: RenderSession<L>, metrics: M) -> Self {
        Self { session, metrics }
    }

    async fn record(&self, succeeded: bool) {
        if succeeded {
            self.metrics.record_render_success().await;
        } else {
            self.metrics.record_render_failure().await;
        }
    }
}

impl<L, M> QuakeMapService for Service<L, M>
where
    L: FeedLoader,
    M: RenderMetrics,
{
    /// Render the [MapPage] and record the outcome.
    ///
    /// # Errors
    ///
    /// - Propagates the feed error of the [RenderSession] as [RenderMapError::Feed].
    async fn render_page(&self) -> Result<MapPage, RenderMapError> {
        let presenter = LeafletPresenter::new(self.session.options().clone());
        let result = self.session.run(presenter).await;

        self.record(result.is_ok()).await;

        Ok(MapPage::from(result?))
    }

    async fn render_snapshot(&self) -> Result<MapSnapshot, RenderMapError> {
        let presenter = SvgPresenter::new(self.session.options().clone());
        let result = self.session.run(presenter).await;

        self.record(result.is_ok()).await;

        Ok(MapSnapshot::from(result?))
    }

    async fn markers(&self) -> Result<Vec<MarkerDescriptor>, RenderMapError> {
        Ok(self.session.markers().await?)
    }

    fn legend(&self) -> Vec<LegendRow> {
        legend_rows(&DEPTH_BANDS)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::outbound::metrics::test::CountingMetrics;

    use quake_core::{EarthquakeFeature, FetchError, FixtureFeedLoader, MapOptions};

    #[derive(Debug, Clone)]
    struct UnreachableFeed;

    impl FeedLoader for UnreachableFeed {
        async fn fetch_features(&self, _url: &str) -> Result<Vec<EarthquakeFeature>, FetchError> {
            Err(FetchError::Status { status: 504 })
        }
    }

    fn fixture_service() -> Service<FixtureFeedLoader, CountingMetrics> {
        let loader = FixtureFeedLoader::new(vec![
            EarthquakeFeature::new("10km SW of Example City", Some(6.1), -122.4, 37.8, 12.0),
            EarthquakeFeature::new("Offshore Example Ridge", None, 150.25, -5.5, 95.3),
        ]);
        let session = RenderSession::new(loader, "fixture", MapOptions::default());

        Service::new(session, CountingMetrics::default())
    }

    #[tokio::test]
    async fn test_render_page_records_success() {
        let service = fixture_service();

        let page = service.render_page().await.unwrap().into_html();

        assert!(page.contains("10km SW of Example City"));
        assert_eq!(service.metrics.counts(), (1, 0));
    }

    #[tokio::test]
    async fn test_render_snapshot() {
        let service = fixture_service();

        let svg = service.render_snapshot().await.unwrap().to_svg_string();

        assert_eq!(svg.matches("<circle").count(), 2);
        assert_eq!(service.metrics.counts(), (1, 0));
    }

    #[tokio::test]
    async fn test_render_failure_is_recorded() {
        let session = RenderSession::new(UnreachableFeed, "unused", MapOptions::default());
        let service = Service::new(session, CountingMetrics::default());

        let result = service.render_page().await;

        assert!(matches!(
            result,
            Err(RenderMapError::Feed(FetchError::Status { status: 504 }))
        ));
        assert_eq!(service.metrics.counts(), (0, 1));
    }

    #[tokio::test]
    async fn test_markers_and_legend() {
        let service = fixture_service();

        let markers = service.markers().await.unwrap();
        let legend = service.legend();

        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].fill_color, "#91cf60");
        assert_eq!(legend.len(), 6);
        assert_eq!(legend[5].label(), "90+");
    }
}
