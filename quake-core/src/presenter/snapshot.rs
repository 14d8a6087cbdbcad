use super::{BaseLayer, MapOptions, MapPresenter, OverlayHandle};
use crate::{
    constants::{LEGEND_SWATCH_SIZE, SVG_HEIGHT, SVG_WIDTH},
    encoding::DepthBand,
    legend::{LegendRow, legend_rows},
    marker::{LatLng, MarkerDescriptor},
};

use svg::{
    Document,
    node::element::{Circle, Group, Line, Rectangle, Text},
};
use tracing::{trace, warn};

const OCEAN: &str = "#dbeafe";
const GRATICULE: &str = "#94a3b8";
const LEGEND_BACKGROUND: &str = "#ffffff";
const LEGEND_ROW_HEIGHT: f64 = 24.0;
const LEGEND_WIDTH: f64 = 110.0;
const LEGEND_MARGIN: f64 = 16.0;

/// Renders the pass into a static SVG world map in plate carrée projection.
///
/// Tiles are not drawn: the base layers only end up as metadata on the root element.
#[derive(Debug, Clone)]
pub struct SvgPresenter {
    options: MapOptions,
    overlays: Vec<Vec<MarkerDescriptor>>,
    base_layers: Vec<BaseLayer>,
    overlay: Option<OverlayHandle>,
    legend: Vec<LegendRow>,
}

impl SvgPresenter {
    pub fn new(options: MapOptions) -> Self {
        Self {
            options,
            overlays: Vec::new(),
            base_layers: Vec::new(),
            overlay: None,
            legend: Vec::new(),
        }
    }

    fn project(position: LatLng) -> (f64, f64) {
        (
            (position.lon + 180.0) / 360.0 * SVG_WIDTH,
            (90.0 - position.lat) / 180.0 * SVG_HEIGHT,
        )
    }

    fn draw_graticule() -> Group {
        let mut group = Group::new()
            .set("stroke", GRATICULE)
            .set("stroke-width", 0.4);

        for lon in (-180..=180).step_by(30) {
            let (x, _) = Self::project(LatLng::new(0.0, lon as f64));
            group = group.add(
                Line::new()
                    .set("x1", x)
                    .set("y1", 0)
                    .set("x2", x)
                    .set("y2", SVG_HEIGHT),
            );
        }

        for lat in (-90..=90).step_by(30) {
            let (_, y) = Self::project(LatLng::new(lat as f64, 0.0));
            group = group.add(
                Line::new()
                    .set("x1", 0)
                    .set("y1", y)
                    .set("x2", SVG_WIDTH)
                    .set("y2", y),
            );
        }

        group
    }

    fn draw_markers(&self, markers: &[MarkerDescriptor]) -> Group {
        let style = self.options.marker_style;
        let mut group = Group::new()
            .set("id", self.options.overlay_name.as_str())
            .set("stroke", style.color)
            .set("stroke-width", style.weight)
            .set("stroke-opacity", style.opacity)
            .set("fill-opacity", style.fill_opacity);

        for marker in markers {
            let (x, y) = Self::project(marker.position);
            trace!(position = %marker.position, x, y, "projected marker");

            // A negative radius is invalid SVG.
            group = group.add(
                Circle::new()
                    .set("cx", x)
                    .set("cy", y)
                    .set("r", marker.radius.max(0.0))
                    .set("fill", marker.fill_color),
            );
        }

        group
    }

    fn draw_legend(&self) -> Group {
        let height = self.legend.len() as f64 * LEGEND_ROW_HEIGHT + LEGEND_MARGIN / 2.0;
        let left = SVG_WIDTH - LEGEND_WIDTH - LEGEND_MARGIN;
        let top = SVG_HEIGHT - height - LEGEND_MARGIN;
        let swatch = f64::from(LEGEND_SWATCH_SIZE);

        let mut group = Group::new()
            .set("class", "legend")
            .set("font-family", "Arial, Helvetica, sans-serif")
            .set("font-size", 14)
            .add(
                Rectangle::new()
                    .set("x", left)
                    .set("y", top)
                    .set("width", LEGEND_WIDTH)
                    .set("height", height)
                    .set("rx", 5)
                    .set("fill", LEGEND_BACKGROUND)
                    .set("fill-opacity", 0.9),
            );

        for (i, row) in self.legend.iter().enumerate() {
            let row_top = top + LEGEND_MARGIN / 4.0 + i as f64 * LEGEND_ROW_HEIGHT;

            group = group
                .add(
                    Rectangle::new()
                        .set("x", left + 8.0)
                        .set("y", row_top + 3.0)
                        .set("width", swatch)
                        .set("height", swatch)
                        .set("fill", row.color),
                )
                .add(
                    Text::new(row.label())
                        .set("x", left + 16.0 + swatch)
                        .set("y", row_top + 17.0),
                );
        }

        group
    }
}

impl MapPresenter for SvgPresenter {
    type Output = Document;

    fn render_overlay(&mut self, markers: &[MarkerDescriptor]) -> OverlayHandle {
        self.overlays.push(markers.to_vec());
        OverlayHandle::new(self.overlays.len() - 1)
    }

    fn compose_layers(&mut self, base: &[BaseLayer], overlay: OverlayHandle) {
        if overlay.index() >= self.overlays.len() {
            warn!(?overlay, "overlay was not rendered by this presenter");
            return;
        }

        self.base_layers = base.to_vec();
        self.overlay = Some(overlay);
    }

    fn render_legend(&mut self, bands: &[DepthBand]) {
        self.legend = legend_rows(bands);
    }

    fn finish(self) -> Document {
        let base_layers = self
            .base_layers
            .iter()
            .map(|layer| layer.name.as_str())
            .collect::<Vec<_>>()
            .join(",");

        let mut document = Document::new()
            .set("width", SVG_WIDTH)
            .set("height", SVG_HEIGHT)
            .set("viewBox", (0.0, 0.0, SVG_WIDTH, SVG_HEIGHT))
            .set("data-base-layers", base_layers)
            .add(
                Rectangle::new()
                    .set("width", SVG_WIDTH)
                    .set("height", SVG_HEIGHT)
                    .set("fill", OCEAN),
            )
            .add(Self::draw_graticule());

        if let Some(markers) = self
            .overlay
            .and_then(|handle| self.overlays.get(handle.index()))
        {
            document = document.add(self.draw_markers(markers));
        }

        if !self.legend.is_empty() {
            document = document.add(self.draw_legend());
        }

        document
    }
}
