//! TLS utilities for the HTTP client.
//!
//! Builds a rustls `ClientConfig` that presents a client certificate and trusts
//! only the CA certificates found in a caller-supplied PEM bundle. The OS
//! certificate store and webpki roots are never consulted.

use crate::config::MutualTlsConfig;
use crate::error::HttpError;
use rustls::RootCertStore;
use rustls_pki_types::pem::PemObject;
use rustls_pki_types::{CertificateDer, PrivateKeyDer};
use std::path::Path;
use std::sync::Arc;

/// Get the crypto provider for TLS connections.
///
/// 1. If a default provider is already installed globally, use it
/// 2. Otherwise create an aws-lc-rs provider without installing it globally
pub fn get_crypto_provider() -> Arc<rustls::crypto::CryptoProvider> {
    rustls::crypto::CryptoProvider::get_default()
        .cloned()
        .unwrap_or_else(|| Arc::new(rustls::crypto::aws_lc_rs::default_provider()))
}

/// Read the client certificate chain and private key.
fn load_client_identity(
    cert_file: &Path,
    key_file: &Path,
) -> Result<(Vec<CertificateDer<'static>>, PrivateKeyDer<'static>), HttpError> {
    let identity_error = |path: &Path, reason: String| HttpError::ClientIdentity {
        path: path.to_path_buf(),
        reason,
    };

    let certs = CertificateDer::pem_file_iter(cert_file)
        .and_then(|certs| certs.collect::<Result<Vec<_>, _>>())
        .map_err(|e| identity_error(cert_file, e.to_string()))?;

    if certs.is_empty() {
        return Err(identity_error(
            cert_file,
            "no certificates found in PEM file".to_owned(),
        ));
    }

    let key = PrivateKeyDer::from_pem_file(key_file)
        .map_err(|e| identity_error(key_file, e.to_string()))?;

    Ok((certs, key))
}

/// Build a root store from every certificate in the trust bundle.
///
/// An empty result is an error: a client must never be built with nothing
/// to verify the server against.
fn load_trust_store(trust_bundle: &Path) -> Result<RootCertStore, HttpError> {
    let trust_error = |reason: String| HttpError::TrustStore {
        path: trust_bundle.to_path_buf(),
        reason,
    };

    let certs = CertificateDer::pem_file_iter(trust_bundle)
        .and_then(|certs| certs.collect::<Result<Vec<_>, _>>())
        .map_err(|e| trust_error(e.to_string()))?;

    if certs.is_empty() {
        return Err(trust_error("no certificates found in PEM file".to_owned()));
    }

    let mut root_store = RootCertStore::empty();
    let (added, ignored) = root_store.add_parsable_certificates(certs);

    if ignored > 0 {
        tracing::warn!(
            path = %trust_bundle.display(),
            added,
            ignored,
            "some trust bundle certificates could not be parsed"
        );
    }

    if added == 0 {
        return Err(trust_error(format!(
            "no valid CA certificates parsed (all {ignored} failed to parse)"
        )));
    }

    tracing::debug!(path = %trust_bundle.display(), count = added, "loaded trust bundle");
    Ok(root_store)
}

/// Build a rustls `ClientConfig` for mutual TLS.
///
/// # Errors
///
/// - `HttpError::ClientIdentity` if the certificate or key file is unreadable,
///   holds no PEM item, or the pair is rejected by rustls
/// - `HttpError::TrustStore` if the trust bundle is unreadable or yields no
///   usable CA certificate
/// - `HttpError::Tls` if the protocol versions cannot be configured
pub fn mutual_tls_client_config(tls: &MutualTlsConfig) -> Result<rustls::ClientConfig, HttpError> {
    let (certs, key) = load_client_identity(&tls.cert_file, &tls.key_file)?;
    let root_store = load_trust_store(&tls.trust_bundle)?;

    rustls::ClientConfig::builder_with_provider(get_crypto_provider())
        .with_safe_default_protocol_versions()
        .map_err(|e| HttpError::Tls(Box::new(e)))?
        .with_root_certificates(root_store)
        .with_client_auth_cert(certs, key)
        .map_err(|e| HttpError::ClientIdentity {
            path: tls.key_file.clone(),
            reason: e.to_string(),
        })
}
