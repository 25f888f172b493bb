use crate::client::{HttpClient, HttpService};
use crate::config::{HttpClientConfig, MutualTlsConfig, TransportSecurity};
use crate::error::HttpError;
use crate::layers::UserAgentLayer;
use crate::response::ResponseBody;
use crate::tls;
use bytes::Bytes;
use http::Response;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use std::time::Duration;
use tower::timeout::TimeoutLayer;
use tower::{ServiceBuilder, ServiceExt};

/// Builder for constructing an [`HttpClient`] that authenticates with a client
/// certificate and trusts only the configured CA bundle.
pub struct HttpClientBuilder {
    config: HttpClientConfig,
}

impl HttpClientBuilder {
    /// Create a builder with default timeout, user agent and body limit
    #[must_use]
    pub fn new(tls: MutualTlsConfig) -> Self {
        Self {
            config: HttpClientConfig::new(tls),
        }
    }

    /// Create a builder with a specific configuration
    #[must_use]
    pub fn with_config(config: HttpClientConfig) -> Self {
        Self { config }
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set the user agent string
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the maximum response body size
    #[must_use]
    pub fn max_body_size(mut self, size: usize) -> Self {
        self.config.max_body_size = size;
        self
    }

    /// Set transport security mode
    ///
    /// Use `TransportSecurity::AllowInsecureHttp` only for testing with mock servers.
    #[must_use]
    pub fn transport(mut self, transport: TransportSecurity) -> Self {
        self.config.transport = transport;
        self
    }

    /// Allow insecure HTTP connections (for testing only)
    ///
    /// Equivalent to `.transport(TransportSecurity::AllowInsecureHttp)`.
    ///
    /// Only available in debug builds or when the `allow-insecure-http` feature
    /// is enabled.
    #[must_use]
    #[cfg(any(debug_assertions, feature = "allow-insecure-http"))]
    pub fn allow_insecure_http(mut self) -> Self {
        tracing::warn!(
            target: "registry_http::security",
            "allow_insecure_http() called - HTTP traffic will NOT be encrypted"
        );
        self.config.transport = TransportSecurity::AllowInsecureHttp;
        self
    }

    /// Build the HTTP client
    ///
    /// Reads and validates the certificate, key and trust bundle on every call.
    ///
    /// # Errors
    /// - `HttpError::ClientIdentity` / `HttpError::TrustStore` if the PEM material
    ///   cannot be loaded
    /// - `HttpError::InvalidHeaderValue` if the user agent is not a valid header value
    pub fn build(self) -> Result<HttpClient, HttpError> {
        if self.config.transport == TransportSecurity::AllowInsecureHttp {
            tracing::warn!(
                "insecure HTTP enabled (TransportSecurity::AllowInsecureHttp); \
                 use only for testing with mock servers"
            );
        }

        let timeout = self.config.request_timeout;
        let https = build_https_connector(&self.config.tls, self.config.transport)?;
        let hyper_client = Client::builder(TokioExecutor::new()).build::<_, Full<Bytes>>(https);
        let ua_layer = UserAgentLayer::try_new(&self.config.user_agent)?;

        // Request flow: Timeout -> UserAgent -> hyper_client.
        // No retry and no redirect following: one request, one round trip.
        let service = ServiceBuilder::new()
            .layer(TimeoutLayer::new(timeout))
            .layer(ua_layer)
            .service(hyper_client)
            .map_response(map_incoming_response)
            .map_err(move |e: tower::BoxError| map_tower_error(e, timeout));

        Ok(HttpClient {
            service: HttpService::new(service),
            max_body_size: self.config.max_body_size,
            request_timeout: timeout,
            transport_security: self.config.transport,
        })
    }
}

/// Map tower errors to `HttpError` with the actual timeout duration
fn map_tower_error(err: tower::BoxError, timeout: Duration) -> HttpError {
    if err.is::<tower::timeout::error::Elapsed>() {
        return HttpError::Timeout(timeout);
    }
    HttpError::Transport(err)
}

fn map_incoming_response(response: Response<Incoming>) -> Response<ResponseBody> {
    let (parts, body) = response.into_parts();
    let boxed_body: ResponseBody = body.map_err(Into::into).boxed();
    Response::from_parts(parts, boxed_body)
}

/// Build the HTTPS connector around the mutual TLS client config.
///
/// HTTP/2 is offered via ALPN alongside HTTP/1.1; the server picks.
fn build_https_connector(
    tls: &MutualTlsConfig,
    transport: TransportSecurity,
) -> Result<HttpsConnector<HttpConnector>, HttpError> {
    let client_config = tls::mutual_tls_client_config(tls)?;
    let builder = hyper_rustls::HttpsConnectorBuilder::new().with_tls_config(client_config);

    let connector = match transport {
        TransportSecurity::AllowInsecureHttp => {
            builder.https_or_http().enable_all_versions().build()
        }
        TransportSecurity::TlsOnly => builder.https_only().enable_all_versions().build(),
    };
    Ok(connector)
}
