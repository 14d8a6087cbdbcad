use crate::constants::{DEFAULT_RADIUS, RADIUS_SCALE};

/// One row of the depth band table: every depth strictly above `lower_km` (and not above the
/// next band's bound) is drawn with `color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBand {
    pub lower_km: f64,
    pub color: &'static str,
}

impl DepthBand {
    pub const fn new(lower_km: f64, color: &'static str) -> Self {
        DepthBand { lower_km, color }
    }
}

/// Depth bands ordered by ascending lower bound. Both the marker fill and the legend read
/// from this table.
pub const DEPTH_BANDS: [DepthBand; 6] = [
    DepthBand::new(-10.0, "#1a9850"),
    DepthBand::new(10.0, "#91cf60"),
    DepthBand::new(30.0, "#d9ef8b"),
    DepthBand::new(50.0, "#fee08b"),
    DepthBand::new(70.0, "#fc8d59"),
    DepthBand::new(90.0, "#d73027"),
];

/// Fill color for an event at `depth_km`, see [color_for_depth_in].
pub fn color_for_depth(depth_km: f64) -> &'static str {
    color_for_depth_in(&DEPTH_BANDS, depth_km).unwrap_or(DEPTH_BANDS[0].color)
}

/// Picks the color of the highest band whose lower bound `depth_km` strictly exceeds.
///
/// The lowest band is the catch-all: its bound is never compared, so shallower depths
/// (and NaN) land there too. An empty table has no color to give.
pub fn color_for_depth_in(bands: &[DepthBand], depth_km: f64) -> Option<&'static str> {
    let (lowest, rest) = bands.split_first()?;

    let band = rest
        .iter()
        .rev()
        .find(|band| depth_km > band.lower_km)
        .unwrap_or(lowest);

    Some(band.color)
}

/// Marker radius for a magnitude. A missing magnitude, zero and NaN all map to the default
/// radius; any other value (negative included) is scaled as is.
pub fn radius_for_magnitude(magnitude: Option<f64>) -> f64 {
    match magnitude {
        Some(mag) if mag != 0.0 && !mag.is_nan() => mag * RADIUS_SCALE,
        _ => DEFAULT_RADIUS,
    }
}
