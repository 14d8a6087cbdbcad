use crate::error::{FetchError, MalformedFeatureError};

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

/// One earthquake as reported by the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeFeature {
    pub place: String,
    pub magnitude: Option<f64>,
    /// Kilometres below sea level, negative for events above it.
    pub depth_km: f64,
    pub longitude: f64,
    pub latitude: f64,
}

impl EarthquakeFeature {
    pub fn new(
        place: impl Into<String>,
        magnitude: Option<f64>,
        longitude: f64,
        latitude: f64,
        depth_km: f64,
    ) -> Self {
        Self {
            place: place.into(),
            magnitude,
            depth_km,
            longitude,
            latitude,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawFeatureCollection {
    // Kept loose so a single bad feature is reported with its index.
    features: Vec<Value>,
}

impl TryFrom<&Value> for EarthquakeFeature {
    type Error = MalformedFeatureError;

    fn try_from(raw: &Value) -> Result<Self, Self::Error> {
        let feature = raw
            .as_object()
            .ok_or_else(|| MalformedFeatureError::new("feature is not an object"))?;

        let properties: &Map<String, Value> = match feature.get("properties") {
            Some(Value::Object(properties)) => properties,
            Some(Value::Null) | None => {
                return Err(MalformedFeatureError::new("missing properties"));
            }
            Some(_) => return Err(MalformedFeatureError::new("properties are not an object")),
        };

        let place = match properties.get("place") {
            Some(Value::String(place)) => place.clone(),
            Some(_) => return Err(MalformedFeatureError::new("`place` is not a string")),
            None => return Err(MalformedFeatureError::new("missing `place`")),
        };

        let magnitude = match properties.get("mag") {
            Some(Value::Null) => None,
            Some(value) => Some(
                value
                    .as_f64()
                    .ok_or_else(|| MalformedFeatureError::new("`mag` is not a number"))?,
            ),
            None => return Err(MalformedFeatureError::new("missing `mag`")),
        };

        let geometry = match feature.get("geometry") {
            Some(Value::Object(geometry)) => geometry,
            Some(Value::Null) | None => return Err(MalformedFeatureError::new("missing geometry")),
            Some(_) => return Err(MalformedFeatureError::new("geometry is not an object")),
        };

        let coordinates = geometry
            .get("coordinates")
            .and_then(Value::as_array)
            .ok_or_else(|| MalformedFeatureError::new("missing coordinates"))?;

        let coordinate = |index: usize, name: &str| {
            coordinates
                .get(index)
                .and_then(Value::as_f64)
                .ok_or_else(|| MalformedFeatureError::new(format!("missing {name} coordinate")))
        };

        Ok(EarthquakeFeature {
            place,
            magnitude,
            longitude: coordinate(0, "longitude")?,
            latitude: coordinate(1, "latitude")?,
            depth_km: coordinate(2, "depth")?,
        })
    }
}

/// Parses a GeoJSON feature collection into earthquakes.
///
/// # Errors
///
/// - [FetchError::Decode] if the payload is not a JSON object with a `features` array.
/// - [FetchError::MalformedFeature] for the first feature that lacks or mistypes an expected key.
pub fn parse_feed(payload: &[u8]) -> Result<Vec<EarthquakeFeature>, FetchError> {
    let collection: RawFeatureCollection = serde_json::from_slice(payload)?;

    let features = collection
        .features
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            EarthquakeFeature::try_from(&raw)
                .map_err(|source| FetchError::MalformedFeature { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = features.len(), "parsed earthquake feed");

    Ok(features)
}

#[cfg(test)]
pub(crate) const TEST_FEED: &str = r#"{
    "type": "FeatureCollection",
    "metadata": { "title": "USGS Significant Earthquakes, Past Week" },
    "features": [
        {
            "type": "Feature",
            "properties": { "mag": 6.1, "place": "10km SW of Example City", "time": 1700000000000 },
            "geometry": { "type": "Point", "coordinates": [-122.4, 37.8, 12] },
            "id": "ex0001"
        },
        {
            "type": "Feature",
            "properties": { "mag": null, "place": "Offshore Example Ridge" },
            "geometry": { "type": "Point", "coordinates": [150.25, -5.5, 95.3] },
            "id": "ex0002"
        },
        {
            "type": "Feature",
            "properties": { "mag": 4.4, "place": "2km N of Volcano Peak" },
            "geometry": { "type": "Point", "coordinates": [-155.3, 19.4, -1.2] },
            "id": "ex0003"
        }
    ]
}"#;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_feed() {
        let features = parse_feed(TEST_FEED.as_bytes()).unwrap();

        assert_eq!(features.len(), 3);
        assert_eq!(
            features[0],
            EarthquakeFeature::new("10km SW of Example City", Some(6.1), -122.4, 37.8, 12.0)
        );
        assert_eq!(features[1].magnitude, None);
        assert_eq!(features[1].depth_km, 95.3);
        assert_eq!(features[2].depth_km, -1.2);
    }

    #[test]
    fn test_parse_feed_without_features() {
        let features = parse_feed(br#"{"type": "FeatureCollection", "features": []}"#).unwrap();

        assert!(features.is_empty());
    }

    #[test]
    fn test_parse_feed_fails_on_invalid_json() {
        let result = parse_feed(b"<html>503 Service Unavailable</html>");

        assert!(matches!(result, Err(FetchError::Decode(_))));

        let result = parse_feed(br#"{"type": "FeatureCollection"}"#);

        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_parse_feed_reports_malformed_feature_index() {
        let payload = br#"{"features": [
            {"properties": {"mag": 1.0, "place": "a"}, "geometry": {"coordinates": [1, 2, 3]}},
            {"properties": {"mag": 1.0, "place": "b"}, "geometry": {"coordinates": [1, 2]}}
        ]}"#;

        match parse_feed(payload) {
            Err(FetchError::MalformedFeature { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source.reason, "missing depth coordinate");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_properties_are_malformed() {
        let cases = [
            (
                r#"{"geometry": {"coordinates": [1, 2, 3]}}"#,
                "missing properties",
            ),
            (
                r#"{"properties": {"mag": 2.0}, "geometry": {"coordinates": [1, 2, 3]}}"#,
                "missing `place`",
            ),
            (
                r#"{"properties":{"place":7,"mag":2.0},"geometry":{"coordinates":[1,2,3]}}"#,
                "`place` is not a string",
            ),
            (
                r#"{"properties": {"place": "x"}, "geometry": {"coordinates": [1, 2, 3]}}"#,
                "missing `mag`",
            ),
            (
                r#"{"properties":{"place":"x","mag":"big"},"geometry":{"coordinates":[1,2,3]}}"#,
                "`mag` is not a number",
            ),
            (
                r#"{"properties": {"place": "x", "mag": 2.0}, "geometry": null}"#,
                "missing geometry",
            ),
            (
                r#"{"properties": "oops", "geometry": {"coordinates": [1, 2, 3]}}"#,
                "properties are not an object",
            ),
            (
                r#"{"properties": {"place": "x", "mag": 2.0}, "geometry": [1, 2, 3]}"#,
                "geometry is not an object",
            ),
            (
                r#"{"properties": {"place": "x", "mag": 2.0}, "geometry": {"coordinates": null}}"#,
                "missing coordinates",
            ),
            (
                r#"{"properties":{"place":"x","mag":2.0},"geometry":{"coordinates":["a",2,3]}}"#,
                "missing longitude coordinate",
            ),
        ];

        for (json, reason) in cases {
            let raw: Value = serde_json::from_str(json).unwrap();
            let error = EarthquakeFeature::try_from(&raw).unwrap_err();

            assert_eq!(error.reason, reason, "{json}");
        }
    }

    #[test]
    fn test_parse_feed_reports_mistyped_feature_shape() {
        let cases: [(&[u8], usize, &str); 3] = [
            (
                br#"{"features": [{"properties": "oops", "geometry": null}]}"#,
                0,
                "properties are not an object",
            ),
            (
                br#"{"features": [
                    {"properties":{"mag":1.0,"place":"a"},"geometry":{"coordinates":[1,2,3]}},
                    {"properties": {"mag": 1.0, "place": "b"}, "geometry": {"coordinates": null}}
                ]}"#,
                1,
                "missing coordinates",
            ),
            (br#"{"features": [42]}"#, 0, "feature is not an object"),
        ];

        for (payload, expected_index, reason) in cases {
            match parse_feed(payload) {
                Err(FetchError::MalformedFeature { index, source }) => {
                    assert_eq!(index, expected_index);
                    assert_eq!(source.reason, reason);
                }
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }
}
