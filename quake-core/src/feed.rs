/*!
   Module `feed` defines the capability through which earthquakes enter a render pass.

   The loader is a seam: production code talks to the live feed over HTTP, tests and offline
   renders hand in a fixed collection.
*/

use crate::{error::FetchError, feature::EarthquakeFeature};

use std::{future::Future, path::Path, sync::Arc};

/// `FeedLoader` produces the earthquakes of one feed.
///
/// Implementations are bounded by `Send + Sync + 'static` so that a single loader can be shared
/// between request-handling threads.
pub trait FeedLoader: Send + Sync + Clone + 'static {
    /// Asynchronously fetch and parse the feed at `url`.
    ///
    /// # Errors
    ///
    /// - A single [FetchError] for any transport, status or decoding failure. Loaders never
    ///   retry.
    fn fetch_features(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<Vec<EarthquakeFeature>, FetchError>> + Send;
}

/// Serves the same features for every url.
#[derive(Debug, Clone, Default)]
pub struct FixtureFeedLoader {
    features: Arc<Vec<EarthquakeFeature>>,
}

impl FixtureFeedLoader {
    pub fn new(features: Vec<EarthquakeFeature>) -> Self {
        Self {
            features: Arc::new(features),
        }
    }

    /// Loads a GeoJSON feature collection from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FetchError> {
        let payload = std::fs::read(path)?;
        let features = crate::feature::parse_feed(&payload)?;

        Ok(Self::new(features))
    }
}

impl FeedLoader for FixtureFeedLoader {
    async fn fetch_features(&self, _url: &str) -> Result<Vec<EarthquakeFeature>, FetchError> {
        Ok(self.features.as_ref().clone())
    }
}

#[cfg(feature = "http")]
mod http {
    use super::FeedLoader;
    use crate::{
        error::FetchError,
        feature::{EarthquakeFeature, parse_feed},
    };

    use std::time::Duration;

    use reqwest::Client;
    use tracing::{debug, warn};

    const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Fetches the feed with a single GET request.
    #[derive(Debug, Clone)]
    pub struct HttpFeedLoader {
        client: Client,
    }

    impl HttpFeedLoader {
        pub fn new() -> Result<Self, FetchError> {
            Self::with_timeout(DEFAULT_TIMEOUT)
        }

        pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
            let client = Client::builder().timeout(timeout).build()?;

            Ok(Self { client })
        }
    }

    impl FeedLoader for HttpFeedLoader {
        async fn fetch_features(&self, url: &str) -> Result<Vec<EarthquakeFeature>, FetchError> {
            debug!(url, "fetching earthquake feed");

            let response = self.client.get(url).send().await?;

            let status = response.status();
            if !status.is_success() {
                warn!(url, status = status.as_u16(), "earthquake feed request rejected");
                return Err(FetchError::Status {
                    status: status.as_u16(),
                });
            }

            let payload = response.bytes().await?;
            debug!(bytes = payload.len(), "received earthquake feed");

            parse_feed(&payload)
        }
    }

    #[cfg(test)]
    mod test {
        use super::*;
        use crate::feature::TEST_FEED;

        use std::{
            net::SocketAddr,
            sync::{
                Arc,
                atomic::{AtomicUsize, Ordering},
            },
        };

        use tokio::{
            io::{AsyncReadExt, AsyncWriteExt},
            net::TcpListener,
        };

        /// Answers every connection with the same raw response and counts the requests.
        async fn serve(
            status_line: &'static str,
            body: &'static str,
        ) -> (SocketAddr, Arc<AtomicUsize>) {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let requests = Arc::new(AtomicUsize::new(0));

            let counter = Arc::clone(&requests);
            tokio::spawn(async move {
                loop {
                    let (mut stream, _) = listener.accept().await.unwrap();

                    let mut request = Vec::new();
                    let mut buf = [0u8; 1024];
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        let read = stream.read(&mut buf).await.unwrap();
                        if read == 0 {
                            break;
                        }
                        request.extend_from_slice(&buf[..read]);
                    }
                    counter.fetch_add(1, Ordering::SeqCst);

                    let response = format!(
                        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\n\
                         Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    stream.write_all(response.as_bytes()).await.unwrap();
                    stream.shutdown().await.unwrap();
                }
            });

            (addr, requests)
        }

        #[tokio::test]
        async fn test_http_loader_reports_status_without_retry() {
            let (addr, requests) = serve("503 Service Unavailable", "busy").await;
            let loader = HttpFeedLoader::new().unwrap();

            let result = loader.fetch_features(&format!("http://{addr}/feed")).await;

            assert!(matches!(result, Err(FetchError::Status { status: 503 })));
            assert_eq!(requests.load(Ordering::SeqCst), 1);
        }

        #[tokio::test]
        async fn test_http_loader_parses_feed() {
            let (addr, requests) = serve("200 OK", TEST_FEED).await;
            let loader = HttpFeedLoader::new().unwrap();

            let features = loader
                .fetch_features(&format!("http://{addr}/feed"))
                .await
                .unwrap();

            assert_eq!(features.len(), 3);
            assert_eq!(features[1].place, "Offshore Example Ridge");
            assert_eq!(requests.load(Ordering::SeqCst), 1);
        }

        #[tokio::test]
        async fn test_http_loader_reports_unreachable_feed() {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);

            let loader = HttpFeedLoader::new().unwrap();
            let result = loader.fetch_features(&format!("http://{addr}/feed")).await;

            assert!(matches!(result, Err(FetchError::Http(_))));
        }
    }
}

#[cfg(feature = "http")]
pub use http::HttpFeedLoader;
