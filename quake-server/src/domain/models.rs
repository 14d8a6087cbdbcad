use quake_core::FetchError;

use derive_more::From;
use thiserror::Error;

/// A rendered, self-contained Leaflet page.
#[derive(Clone, Debug, PartialEq, Eq, From)]
pub struct MapPage(String);

impl MapPage {
    pub fn into_html(self) -> String {
        self.0
    }
}

/// A rendered static SVG map.
#[derive(Clone, Debug, From)]
pub struct MapSnapshot(svg::Document);

impl MapSnapshot {
    pub fn to_svg_string(&self) -> String {
        self.0.to_string()
    }
}

/// A render pass can only fail on its one feed fetch.
#[derive(Debug, Error)]
pub enum RenderMapError {
    #[error(transparent)]
    Feed(#[from] FetchError),
}
