use registry_http::HttpError;
use service_registry_sdk::ServiceRegistryError;

/// Translate a transport failure into the connection error taxonomy.
///
/// JSON failures reaching this point come from reading responses; request
/// encoding is mapped separately with [`encode_error`].
pub fn map_http_error(err: HttpError) -> ServiceRegistryError {
    match err {
        HttpError::ClientIdentity { .. } | HttpError::Tls(_) => {
            ServiceRegistryError::Credentials(err.to_string())
        }
        HttpError::TrustStore { .. } => ServiceRegistryError::TrustStore(err.to_string()),
        HttpError::HttpStatus { status, body } => {
            ServiceRegistryError::UnexpectedStatus { status, body }
        }
        HttpError::Json(e) => ServiceRegistryError::Decode(e.to_string()),
        HttpError::FormEncode(e) => ServiceRegistryError::Encode(e.to_string()),
        other => ServiceRegistryError::Transport(other.to_string()),
    }
}

/// Translate a failure while building a request body.
pub fn encode_error(err: HttpError) -> ServiceRegistryError {
    match err {
        HttpError::Json(e) => ServiceRegistryError::Encode(e.to_string()),
        other => map_http_error(other),
    }
}
