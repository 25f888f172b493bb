//! Entity descriptors exchanged with a service registry.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Network location of a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistryTarget {
    pub address: String,
    pub port: u16,
}

impl RegistryTarget {
    #[must_use]
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
        }
    }
}

/// A service offered by a provider system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinition {
    /// Service name.
    pub service_definition: String,
    pub service_uri: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

impl ServiceDefinition {
    #[must_use]
    pub fn new(service_definition: impl Into<String>, service_uri: impl Into<String>) -> Self {
        Self {
            service_definition: service_definition.into(),
            service_uri: service_uri.into(),
            metadata: BTreeMap::new(),
            version: None,
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }
}

/// A system (application instance) that provides services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemDefinition {
    pub system_name: String,
    pub address: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_info: Option<String>,
}

impl SystemDefinition {
    #[must_use]
    pub fn new(system_name: impl Into<String>, address: impl Into<String>, port: u16) -> Self {
        Self {
            system_name: system_name.into(),
            address: address.into(),
            port,
            authentication_info: None,
        }
    }

    /// Attach the system's public key (base64 DER), as some registries require it.
    #[must_use]
    pub fn with_authentication_info(mut self, authentication_info: impl Into<String>) -> Self {
        self.authentication_info = Some(authentication_info.into());
        self
    }
}

/// Paths to the PEM files used for mutual TLS.
///
/// All three must point to readable, parseable PEM content; otherwise every
/// operation on a connection built from this bundle fails before reaching
/// the network.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CertificateInfo {
    /// Client certificate chain.
    pub cert_file_path: PathBuf,
    /// Client private key.
    pub key_file_path: PathBuf,
    /// CA certificates trusted to sign the registry's certificate.
    pub truststore: PathBuf,
}

impl CertificateInfo {
    #[must_use]
    pub fn new(
        cert_file_path: impl Into<PathBuf>,
        key_file_path: impl Into<PathBuf>,
        truststore: impl Into<PathBuf>,
    ) -> Self {
        Self {
            cert_file_path: cert_file_path.into(),
            key_file_path: key_file_path.into(),
            truststore: truststore.into(),
        }
    }
}

/// Providers found by a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceQueryResult {
    pub service_query_data: Vec<QueryResult>,
}

impl ServiceQueryResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.service_query_data.is_empty()
    }
}

/// One provider system together with the service it offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub provider: SystemDefinition,
    pub service: ServiceDefinition,
}
