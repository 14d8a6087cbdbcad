//! Static markup of the Leaflet page. The assets live in the binary as `&'static str` so a
//! rendered page never needs a filesystem lookup.

pub(super) const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub(super) const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

pub(super) const PAGE_STYLE: &str = r#"
    html, body { height: 100%; margin: 0; padding: 0; }
    .map-container { height: 100%; width: 100%; }
    .info.legend {
      background: rgba(255, 255, 255, 0.9);
      padding: 8px 10px;
      border-radius: 5px;
      box-shadow: 0 0 15px rgba(0, 0, 0, 0.2);
      font: 14px/18px Arial, Helvetica, sans-serif;
      line-height: 24px;
    }
    .quake-error {
      margin: 4em auto;
      max-width: 40em;
      font: 16px/1.5 Arial, Helvetica, sans-serif;
      color: #7f1d1d;
      background: #fef2f2;
      border: 1px solid #fecaca;
      border-radius: 6px;
      padding: 1em 1.5em;
    }
"#;

// Reads the embedded `quake-data` document and wires up layers, control and legend.
pub(super) const PAGE_SCRIPT: &str = r#"
  (function () {
    const config = JSON.parse(document.getElementById("quake-data").textContent);

    const baseMaps = {};
    const enabled = [];
    config.baseLayers.forEach(function (layer, i) {
      const tiles = L.tileLayer(layer.urlTemplate, { attribution: layer.attribution });
      baseMaps[layer.name] = tiles;
      if (i === 0) {
        enabled.push(tiles);
      }
    });

    const overlayMaps = {};
    if (config.overlay) {
      const circles = config.overlay.markers.map(function (marker) {
        const style = Object.assign(
          { radius: marker.radius, fillColor: marker.fillColor },
          config.markerStyle
        );
        return L.circleMarker([marker.position.lat, marker.position.lon], style)
          .bindPopup(marker.popupText);
      });
      const earthquakes = L.layerGroup(circles);
      overlayMaps[config.overlay.name] = earthquakes;
      enabled.push(earthquakes);
    }

    const map = L.map(config.container, {
      center: config.center,
      zoom: config.zoom,
      layers: enabled
    });

    L.control.layers(baseMaps, overlayMaps, { collapsed: config.collapsed }).addTo(map);

    if (config.legend) {
      const legend = L.control({ position: config.legend.position });
      legend.onAdd = function () {
        const wrapper = document.createElement("div");
        wrapper.innerHTML = config.legend.html;
        return wrapper.firstElementChild;
      };
      legend.addTo(map);
    }
  })();
"#;

pub(super) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Keeps a JSON document from closing the `<script>` element it is embedded in, or from
/// switching the HTML parser into an escaped comment state with `<!--`.
///
/// Angle brackets only occur inside JSON strings, where `\u003c`/`\u003e` decode back to
/// the same characters.
pub(super) fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c").replace('>', "\\u003e")
}

/// Page shown in place of the map when a render pass fails.
pub fn error_page(message: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Earthquake map unavailable</title>
  <style>{style}</style>
</head>
<body>
  <div class="quake-error" role="alert">
    <h1>Earthquake map unavailable</h1>
    <p>{message}</p>
  </div>
</body>
</html>
"#,
        style = PAGE_STYLE,
        message = escape_html(message),
    )
}
