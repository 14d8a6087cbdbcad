mod html;
mod leaflet;
mod snapshot;

use crate::{
    constants::{
        LEGEND_POSITION, MAP_CENTER, MAP_CONTAINER_ID, MAP_ZOOM, OVERLAY_NAME, STREET_ATTRIBUTION,
        STREET_TILES_URL, TOPO_ATTRIBUTION, TOPO_TILES_URL,
    },
    encoding::DepthBand,
    marker::{CircleStyle, LatLng, MarkerDescriptor},
};

use serde::Serialize;

pub use html::error_page;
pub use leaflet::LeafletPresenter;
pub use snapshot::SvgPresenter;

/// Draws one render pass: first the earthquake overlay, then the layer composition, then
/// the legend.
pub trait MapPresenter {
    type Output;

    /// Turns the markers into an overlay the presenter keeps until [MapPresenter::finish].
    fn render_overlay(&mut self, markers: &[MarkerDescriptor]) -> OverlayHandle;

    /// Puts the overlay on top of the base layers. The first base layer is the one shown
    /// initially.
    fn compose_layers(&mut self, base: &[BaseLayer], overlay: OverlayHandle);

    fn render_legend(&mut self, bands: &[DepthBand]);

    fn finish(self) -> Self::Output;
}

/// Refers to an overlay rendered by the presenter that handed it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayHandle(usize);

impl OverlayHandle {
    pub fn new(index: usize) -> Self {
        OverlayHandle(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// A named tile layer the user can switch to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseLayer {
    pub name: String,
    pub url_template: String,
    pub attribution: String,
}

impl BaseLayer {
    pub fn new(
        name: impl Into<String>,
        url_template: impl Into<String>,
        attribution: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url_template: url_template.into(),
            attribution: attribution.into(),
        }
    }

    pub fn street() -> Self {
        Self::new("Street Map", STREET_TILES_URL, STREET_ATTRIBUTION)
    }

    pub fn topographic() -> Self {
        Self::new("Topographic Map", TOPO_TILES_URL, TOPO_ATTRIBUTION)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub title: String,
    /// Id of the element the map attaches to.
    pub container_id: String,
    pub center: LatLng,
    pub zoom: u8,
    pub overlay_name: String,
    pub base_layers: Vec<BaseLayer>,
    pub collapsed_control: bool,
    pub legend_position: String,
    pub marker_style: CircleStyle,
}

impl Default for MapOptions {
    fn default() -> Self {
        MapOptions {
            title: "Earthquakes".to_string(),
            container_id: MAP_CONTAINER_ID.to_string(),
            center: LatLng::new(MAP_CENTER[0], MAP_CENTER[1]),
            zoom: MAP_ZOOM,
            overlay_name: OVERLAY_NAME.to_string(),
            base_layers: vec![BaseLayer::street(), BaseLayer::topographic()],
            collapsed_control: false,
            legend_position: LEGEND_POSITION.to_string(),
            marker_style: CircleStyle::default(),
        }
    }
}

#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Interactive Leaflet page
    #[default]
    Html,
    /// Static SVG snapshot
    Svg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Svg => "svg",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = MapOptions::default();

        assert_eq!(options.container_id, "map");
        assert_eq!(options.center, LatLng::new(37.09, -95.71));
        assert_eq!(options.zoom, 5);
        assert_eq!(options.overlay_name, "Earthquakes");
        assert!(!options.collapsed_control);
        assert_eq!(options.legend_position, "bottomright");

        let names: Vec<_> = options.base_layers.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Street Map", "Topographic Map"]);
    }

    #[test]
    fn test_output_format_extension() {
        assert_eq!(OutputFormat::default().extension(), "html");
        assert_eq!(OutputFormat::Svg.extension(), "svg");
    }
}
