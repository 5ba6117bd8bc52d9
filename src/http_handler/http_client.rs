use tokio::sync::RwLock;

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and default settings.
///
/// This client is used for making REST API calls to the case review backend.
/// It sets a fixed timeout and allows easy reuse of the HTTP client
/// infrastructure. Every failed request issued through it is recorded in an
/// instance-owned failure sink for later inspection.
#[derive(Debug)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
    /// Append-only record of failed requests. Never cleared or bounded by
    /// this crate; callers that keep a client alive indefinitely own the
    /// growth.
    failures: RwLock<Vec<FailedRequest>>,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL.
    ///
    /// This client has a default request timeout of 5 seconds.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests (e.g.,
    ///   `"http://localhost:8000"`).
    #[must_use]
    pub fn new(base_url: &str) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(5))
                .build()
                .unwrap(),
            base_url: String::from(base_url),
            failures: RwLock::new(Vec::new()),
        }
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the base URL that the client was initialized with.
    pub fn url(&self) -> &str { self.base_url.as_str() }

    /// Appends a failed request to the sink.
    pub(crate) async fn record_failure(&self, failure: FailedRequest) {
        self.failures.write().await.push(failure);
    }

    /// Returns a snapshot of all failures recorded so far, oldest first.
    pub async fn failures(&self) -> Vec<FailedRequest> { self.failures.read().await.clone() }

    /// Returns the number of failures recorded so far.
    pub async fn failure_count(&self) -> usize { self.failures.read().await.len() }
}

/// One recorded request failure: the endpoint it hit, the response status if
/// one was received, and the response body or transport error description.
#[derive(Debug, Clone)]
pub struct FailedRequest {
    endpoint: String,
    status: Option<reqwest::StatusCode>,
    body: String,
    recorded_at: chrono::DateTime<chrono::Utc>,
}

impl FailedRequest {
    pub(crate) fn new(
        endpoint: &str,
        status: Option<reqwest::StatusCode>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: String::from(endpoint),
            status,
            body: body.into(),
            recorded_at: chrono::Utc::now(),
        }
    }

    pub fn endpoint(&self) -> &str { &self.endpoint }
    pub fn status(&self) -> Option<reqwest::StatusCode> { self.status }
    pub fn body(&self) -> &str { &self.body }
    pub fn recorded_at(&self) -> chrono::DateTime<chrono::Utc> { self.recorded_at }
}
