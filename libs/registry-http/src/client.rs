use crate::builder::HttpClientBuilder;
use crate::config::{MutualTlsConfig, TransportSecurity};
use crate::error::HttpError;
use crate::request::RequestBuilder;
use crate::response::ResponseBody;
use bytes::Bytes;
use http::{Request, Response};
use http_body_util::Full;
use std::time::Duration;
use tower::util::BoxCloneSyncService;

/// Type-erased tower stack behind [`HttpClient`]
pub type HttpService = BoxCloneSyncService<Request<Full<Bytes>>, Response<ResponseBody>, HttpError>;

/// Mutual-TLS HTTP client with a tower middleware stack
///
/// The stack is `Timeout -> UserAgent -> hyper`, with no retries and no
/// redirect following. The request timeout is a single deadline per call:
/// it covers sending the request and reading the whole response body. Use [`HttpClientBuilder`] to construct instances.
///
/// `HttpClient` is `Clone + Send + Sync`; cloning shares the underlying
/// connection pool.
///
/// # Example
///
/// ```ignore
/// let client = HttpClient::new(MutualTlsConfig::new("c.pem", "k.pem", "ca.pem"))?;
/// let echo = client
///     .get("https://registry:8443/serviceregistry/echo")
///     .send()
///     .await?
///     .text()
///     .await?;
/// ```
#[derive(Clone)]
pub struct HttpClient {
    pub(crate) service: HttpService,
    pub(crate) max_body_size: usize,
    pub(crate) request_timeout: Duration,
    pub(crate) transport_security: TransportSecurity,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    ///
    /// # Errors
    /// Returns an error if the TLS material cannot be loaded
    pub fn new(tls: MutualTlsConfig) -> Result<Self, HttpError> {
        HttpClientBuilder::new(tls).build()
    }

    /// Create a builder for configuring the HTTP client
    #[must_use]
    pub fn builder(tls: MutualTlsConfig) -> HttpClientBuilder {
        HttpClientBuilder::new(tls)
    }

    /// Create a GET request builder
    ///
    /// The URL must be absolute (`https://host:port/path`). Query parameters
    /// are added with [`RequestBuilder::query`].
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.request(http::Method::GET, url)
    }

    /// Create a POST request builder
    ///
    /// # Example
    ///
    /// ```ignore
    /// let resp = client
    ///     .post("https://registry:8443/serviceregistry/register-system")
    ///     .json(&system)?
    ///     .send()
    ///     .await?;
    /// ```
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.request(http::Method::POST, url)
    }

    /// Create a DELETE request builder
    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.request(http::Method::DELETE, url)
    }

    fn request(&self, method: http::Method, url: &str) -> RequestBuilder {
        RequestBuilder::new(
            self.service.clone(),
            self.max_body_size,
            self.request_timeout,
            method,
            url.to_owned(),
            self.transport_security,
        )
    }
}
