use thiserror::Error;

/// A single feed record that does not have the shape of an earthquake.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("malformed feature: {reason}")]
pub struct MalformedFeatureError {
    pub reason: String,
}

impl MalformedFeatureError {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Anything that keeps the feed from turning into a list of features.
#[derive(Debug, Error)]
pub enum FetchError {
    #[cfg(feature = "http")]
    #[error("request to earthquake feed failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("earthquake feed answered with status {status}")]
    Status { status: u16 },
    #[error("earthquake feed is not a feature collection: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("feature #{index} in earthquake feed: {source}")]
    MalformedFeature {
        index: usize,
        #[source]
        source: MalformedFeatureError,
    },
    #[error("failed to read earthquake fixture: {0}")]
    Io(#[from] std::io::Error),
}

