mod constants;
mod encoding;
mod error;
mod feature;
mod feed;
mod legend;
mod marker;
mod presenter;
mod session;

pub use constants::DEFAULT_FEED_URL;
pub use encoding::{
    DEPTH_BANDS, DepthBand, color_for_depth, color_for_depth_in, radius_for_magnitude,
};
pub use error::{FetchError, MalformedFeatureError};
pub use feature::{EarthquakeFeature, parse_feed};
#[cfg(feature = "http")]
pub use feed::HttpFeedLoader;
pub use feed::{FeedLoader, FixtureFeedLoader};
pub use legend::{LegendRow, legend_html, legend_rows};
pub use marker::{CircleStyle, LatLng, MarkerDescriptor, transform_features};
pub use presenter::{
    BaseLayer, LeafletPresenter, MapOptions, MapPresenter, OutputFormat, OverlayHandle,
    SvgPresenter, error_page,
};
pub use session::RenderSession;

