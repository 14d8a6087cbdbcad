/// Significant earthquakes of the past week, as published by the USGS.
pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/significant_week.geojson";

pub(crate) const RADIUS_SCALE: f64 = 8.0;
pub(crate) const DEFAULT_RADIUS: f64 = 1.0;

pub(crate) const MAP_CONTAINER_ID: &str = "map";
pub(crate) const MAP_CENTER: [f64; 2] = [37.09, -95.71];
pub(crate) const MAP_ZOOM: u8 = 5;
pub(crate) const OVERLAY_NAME: &str = "Earthquakes";
pub(crate) const LEGEND_POSITION: &str = "bottomright";

pub(crate) const STREET_TILES_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub(crate) const STREET_ATTRIBUTION: &str = r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;

pub(crate) const TOPO_TILES_URL: &str = "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png";
pub(crate) const TOPO_ATTRIBUTION: &str = r#"Map data: &copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors, <a href="http://viewfinderpanoramas.org">SRTM</a> | Map style: &copy; <a href="https://opentopomap.org">OpenTopoMap</a> (<a href="https://creativecommons.org/licenses/by-sa/3.0/">CC-BY-SA</a>)"#;

pub(crate) const LEGEND_SWATCH_SIZE: u32 = 18;

pub(crate) const SVG_WIDTH: f64 = 1200.0;
pub(crate) const SVG_HEIGHT: f64 = 600.0;
