use super::{
    BaseLayer, MapOptions, MapPresenter, OverlayHandle,
    html::{LEAFLET_CSS, LEAFLET_JS, PAGE_SCRIPT, PAGE_STYLE, escape_html, script_safe},
};
use crate::{
    encoding::DepthBand,
    legend::{legend_html, legend_rows},
    marker::{CircleStyle, MarkerDescriptor},
};

use serde::Serialize;
use tracing::{debug, warn};

/// Renders the pass into a self-contained HTML page driven by Leaflet.
#[derive(Debug, Clone)]
pub struct LeafletPresenter {
    options: MapOptions,
    overlays: Vec<Vec<MarkerDescriptor>>,
    base_layers: Vec<BaseLayer>,
    overlay: Option<OverlayHandle>,
    legend: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageData<'a> {
    container: &'a str,
    center: [f64; 2],
    zoom: u8,
    base_layers: &'a [BaseLayer],
    overlay: Option<OverlayData<'a>>,
    marker_style: CircleStyle,
    collapsed: bool,
    legend: Option<LegendData<'a>>,
}

#[derive(Debug, Serialize)]
struct OverlayData<'a> {
    name: &'a str,
    markers: &'a [MarkerDescriptor],
}

#[derive(Debug, Serialize)]
struct LegendData<'a> {
    position: &'a str,
    html: &'a str,
}

impl LeafletPresenter {
    pub fn new(options: MapOptions) -> Self {
        Self {
            options,
            overlays: Vec::new(),
            base_layers: Vec::new(),
            overlay: None,
            legend: None,
        }
    }

    fn page_data(&self) -> PageData<'_> {
        let overlay = self
            .overlay
            .and_then(|handle| self.overlays.get(handle.index()))
            .map(|markers| OverlayData {
                name: &self.options.overlay_name,
                markers,
            });

        PageData {
            container: &self.options.container_id,
            center: [self.options.center.lat, self.options.center.lon],
            zoom: self.options.zoom,
            base_layers: &self.base_layers,
            overlay,
            marker_style: self.options.marker_style,
            collapsed: self.options.collapsed_control,
            legend: self.legend.as_deref().map(|html| LegendData {
                position: &self.options.legend_position,
                html,
            }),
        }
    }
}

impl MapPresenter for LeafletPresenter {
    type Output = String;

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
        self.legend = Some(legend_html(&legend_rows(bands)));
    }

    fn finish(self) -> String {
        let data = serde_json::to_string(&self.page_data()).expect("page data always serializes");

        debug!(bytes = data.len(), "rendered leaflet page data");

        format!(
            r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{title}</title>
  <link rel="stylesheet" href="{css}" crossorigin="" />
  <style>{style}</style>
</head>
<body>
  <div id="{container}" class="map-container"></div>
  <script src="{js}" crossorigin=""></script>
  <script type="application/json" id="quake-data">{data}</script>
  <script>{script}</script>
</body>
</html>
"#,
            title = escape_html(&self.options.title),
            css = LEAFLET_CSS,
            style = PAGE_STYLE,
            container = escape_html(&self.options.container_id),
            js = LEAFLET_JS,
            data = script_safe(&data),
            script = PAGE_SCRIPT,
        )
    }
}
