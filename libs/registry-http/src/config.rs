use std::path::PathBuf;
use std::time::Duration;

/// Default User-Agent string for HTTP requests
pub const DEFAULT_USER_AGENT: &str = concat!("registry-http/", env!("CARGO_PKG_VERSION"));

/// Per-request timeout used unless the builder overrides it
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum response body size read into memory (1 MiB)
pub const DEFAULT_MAX_BODY_SIZE: usize = 1024 * 1024;

/// Transport security mode
///
/// Controls which URL schemes the client accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportSecurity {
    /// Only `https://` URLs are accepted
    #[default]
    TlsOnly,

    /// `http://` URLs are accepted as well
    ///
    /// Intended for local mock servers only. The mutual TLS material is still
    /// loaded and validated when the client is built.
    AllowInsecureHttp,
}

/// Paths to the PEM material used for mutual TLS
///
/// All three files are read every time a client is built; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutualTlsConfig {
    /// Client certificate chain (PEM, leaf first)
    pub cert_file: PathBuf,

    /// Client private key (PEM: PKCS#8, PKCS#1 or SEC1)
    pub key_file: PathBuf,

    /// CA certificates trusted to sign the server certificate (PEM)
    pub trust_bundle: PathBuf,
}

impl MutualTlsConfig {
    #[must_use]
    pub fn new(
        cert_file: impl Into<PathBuf>,
        key_file: impl Into<PathBuf>,
        trust_bundle: impl Into<PathBuf>,
    ) -> Self {
        Self {
            cert_file: cert_file.into(),
            key_file: key_file.into(),
            trust_bundle: trust_bundle.into(),
        }
    }
}

/// Overall HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Timeout for a single request, from send until response headers
    pub request_timeout: Duration,

    /// User-Agent header value
    pub user_agent: String,

    /// Maximum response body size in bytes
    pub max_body_size: usize,

    /// Accepted URL schemes
    pub transport: TransportSecurity,

    /// Client identity and trust anchors
    pub tls: MutualTlsConfig,
}

impl HttpClientConfig {
    /// Configuration with the default timeout, user agent and body limit
    #[must_use]
    pub fn new(tls: MutualTlsConfig) -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            transport: TransportSecurity::TlsOnly,
            tls,
        }
    }
}
