//! Error types for service registry connections.

use thiserror::Error;

/// Errors returned by [`ServiceRegistryConnection`](crate::ServiceRegistryConnection)
/// implementations and the connection factory.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServiceRegistryError {
    /// Client certificate or key could not be loaded.
    #[error("invalid client credentials: {0}")]
    Credentials(String),

    /// Trust bundle could not be loaded or held no usable certificate.
    #[error("invalid trust store: {0}")]
    TrustStore(String),

    /// The liveness probe did not return the expected acknowledgment.
    #[error("can't establish a connection with the service registry: {0}")]
    NotConnected(String),

    /// Network failure, timeout or malformed request URL.
    #[error("transport error: {0}")]
    Transport(String),

    /// The registry answered with a status other than the expected one.
    ///
    /// `body` is the raw response body, kept verbatim for diagnosis.
    #[error("status: {status}, body: {body}")]
    UnexpectedStatus {
        /// Status returned by the registry.
        status: http::StatusCode,
        /// Raw response body.
        body: String,
    },

    /// The request payload could not be encoded.
    #[error("failed to encode request: {0}")]
    Encode(String),

    /// The response payload could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// No implementation is registered for the requested dialect identifier.
    #[error("the service registry {0} has no implementation")]
    UnsupportedImplementation(String),
}
