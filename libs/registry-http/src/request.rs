use crate::client::HttpService;
use crate::config::TransportSecurity;
use crate::error::{HttpError, InvalidUriKind};
use crate::response::HttpResponse;
use bytes::Bytes;
use http::Request;
use http_body_util::Full;
use serde::Serialize;
use std::time::Duration;
use tower::ServiceExt;

/// HTTP request builder with fluent API
///
/// Created by [`HttpClient::get`](crate::HttpClient::get),
/// [`HttpClient::post`](crate::HttpClient::post) and
/// [`HttpClient::delete`](crate::HttpClient::delete).
///
/// # Example
///
/// ```ignore
/// let resp = client
///     .delete("https://registry:8443/serviceregistry/unregister")
///     .query(&[("address", "10.0.0.7"), ("port", "8080")])?
///     .send()
///     .await?;
/// ```
#[must_use = "RequestBuilder does nothing until .send() is called"]
pub struct RequestBuilder {
    service: HttpService,
    max_body_size: usize,
    timeout: Duration,
    method: http::Method,
    url: String,
    headers: Vec<(http::header::HeaderName, http::header::HeaderValue)>,
    body: Option<Bytes>,
    /// Error captured during building (deferred to `send()`)
    error: Option<HttpError>,
    transport_security: TransportSecurity,
}

impl RequestBuilder {
    pub(crate) fn new(
        service: HttpService,
        max_body_size: usize,
        timeout: Duration,
        method: http::Method,
        url: String,
        transport_security: TransportSecurity,
    ) -> Self {
        Self {
            service,
            max_body_size,
            timeout,
            method,
            url,
            headers: Vec::new(),
            body: None,
            error: None,
            transport_security,
        }
    }

    /// Add a single header to the request
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if self.error.is_some() {
            return self;
        }

        match (
            http::header::HeaderName::try_from(name),
            http::header::HeaderValue::try_from(value),
        ) {
            (Ok(name), Ok(value)) => self.headers.push((name, value)),
            (Err(e), _) => self.error = Some(HttpError::InvalidHeaderName(e)),
            (_, Err(e)) => self.error = Some(HttpError::InvalidHeaderValue(e)),
        }
        self
    }

    /// Append query parameters to the URL
    ///
    /// Pairs are encoded as `application/x-www-form-urlencoded` and appended in
    /// the order given, so `("service_uri", "/a b")` becomes
    /// `service_uri=%2Fa+b` and `&` inside a value becomes `%26`.
    ///
    /// # Errors
    ///
    /// Returns `Err(HttpError::FormEncode)` if encoding fails.
    pub fn query(mut self, pairs: &[(&str, &str)]) -> Result<Self, HttpError> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        if pairs.is_empty() {
            return Ok(self);
        }

        let encoded = serde_urlencoded::to_string(pairs)?;
        let separator = if self.url.contains('?') { '&' } else { '?' };
        self.url.push(separator);
        self.url.push_str(&encoded);
        Ok(self)
    }

    /// Set request body as JSON
    ///
    /// Serializes the value using `serde_json` and sets Content-Type to
    /// `application/json` unless a Content-Type header was already provided.
    ///
    /// # Errors
    ///
    /// Returns `Err(HttpError::Json)` if serialization fails.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, HttpError> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }

        let json_bytes = serde_json::to_vec(body)?;
        if !self.has_content_type() {
            self.headers.push((
                http::header::CONTENT_TYPE,
                http::header::HeaderValue::from_static("application/json"),
            ));
        }
        self.body = Some(Bytes::from(json_bytes));
        Ok(self)
    }

    /// Current request URL, including any query string added so far
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn has_content_type(&self) -> bool {
        self.headers
            .iter()
            .any(|(name, _)| name == http::header::CONTENT_TYPE)
    }

    /// Validate URL and scheme against transport security configuration.
    fn validate_url(&self) -> Result<http::Uri, HttpError> {
        let uri: http::Uri =
            self.url
                .parse()
                .map_err(|e: http::uri::InvalidUri| HttpError::InvalidUri {
                    url: self.url.clone(),
                    kind: InvalidUriKind::ParseError,
                    reason: e.to_string(),
                })?;

        if uri.authority().is_none() {
            return Err(HttpError::InvalidUri {
                url: self.url.clone(),
                kind: InvalidUriKind::MissingAuthority,
                reason: "missing host/authority".to_owned(),
            });
        }

        match uri.scheme_str() {
            Some("https") => Ok(uri),
            Some("http") => match self.transport_security {
                TransportSecurity::AllowInsecureHttp => Ok(uri),
                TransportSecurity::TlsOnly => Err(HttpError::InvalidScheme {
                    scheme: "http".to_owned(),
                    reason: "HTTPS required (transport security is TlsOnly)".to_owned(),
                }),
            },
            Some(scheme) => Err(HttpError::InvalidScheme {
                scheme: scheme.to_owned(),
                reason: "only http:// and https:// schemes are supported".to_owned(),
            }),
            None => Err(HttpError::InvalidUri {
                url: self.url.clone(),
                kind: InvalidUriKind::MissingScheme,
                reason: "missing scheme".to_owned(),
            }),
        }
    }

    /// Send the request and return the response
    ///
    /// Returns `Ok` for every HTTP status; status checks are left to
    /// [`HttpResponse::expect_status`].
    ///
    /// # Errors
    ///
    /// Returns `HttpError` if:
    /// - Request building failed (invalid headers, URL, etc.)
    /// - URL scheme is invalid for the transport security mode
    /// - Network/transport/TLS error
    /// - Request timeout
    ///
    /// The deadline starts here and also bounds the body read on the
    /// returned [`HttpResponse`].
    pub async fn send(mut self) -> Result<HttpResponse, HttpError> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        let deadline = tokio::time::Instant::now() + self.timeout;

        let uri = self.validate_url()?;
        tracing::debug!(method = %self.method, path = uri.path(), "sending request");

        let mut builder = Request::builder().method(self.method).uri(uri);
        for (name, value) in self.headers {
            builder = builder.header(name, value);
        }
        let request = builder.body(Full::new(self.body.unwrap_or_default()))?;

        let inner = tokio::time::timeout_at(deadline, self.service.oneshot(request))
            .await
            .map_err(|_| HttpError::Timeout(self.timeout))??;
        tracing::debug!(status = %inner.status(), "received response");

        Ok(HttpResponse {
            inner,
            max_body_size: self.max_body_size,
            deadline,
            timeout: self.timeout,
        })
    }
}
