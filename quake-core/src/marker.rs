use crate::{
    encoding::{color_for_depth, radius_for_magnitude},
    feature::EarthquakeFeature,
};

use std::fmt::{Display, Formatter};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lon: f64) -> Self {
        LatLng { lat, lon }
    }
}

impl Display for LatLng {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// Everything a presenter needs to draw one earthquake.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerDescriptor {
    pub position: LatLng,
    pub radius: f64,
    pub fill_color: &'static str,
    pub popup_text: String,
}

impl MarkerDescriptor {
    pub fn from_feature(feature: &EarthquakeFeature) -> Self {
        MarkerDescriptor {
            position: LatLng::new(feature.latitude, feature.longitude),
            radius: radius_for_magnitude(feature.magnitude),
            fill_color: color_for_depth(feature.depth_km),
            popup_text: popup_text(feature),
        }
    }
}

impl From<&EarthquakeFeature> for MarkerDescriptor {
    fn from(feature: &EarthquakeFeature) -> Self {
        MarkerDescriptor::from_feature(feature)
    }
}

// A missing magnitude is printed the way the feed spelled it.
fn popup_text(feature: &EarthquakeFeature) -> String {
    let magnitude = match feature.magnitude {
        Some(mag) => mag.to_string(),
        None => "null".to_string(),
    };

    format!(
        "<strong>Location:</strong> {}<br><strong>Magnitude:</strong> {}<br><strong>Depth:</strong> {} km",
        feature.place, magnitude, feature.depth_km
    )
}

pub fn transform_features(features: &[EarthquakeFeature]) -> Vec<MarkerDescriptor> {
    features.iter().map(MarkerDescriptor::from_feature).collect()
}

/// Outline and opacity shared by every earthquake circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleStyle {
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl Default for CircleStyle {
    fn default() -> Self {
        CircleStyle {
            color: "#000",
            weight: 0.5,
            opacity: 1.0,
            fill_opacity: 0.8,
        }
    }
}
