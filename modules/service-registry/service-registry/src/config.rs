//! Configuration for a service registry connection.

use serde::Deserialize;
use service_registry_sdk::{
    CertificateInfo, RegistryTarget, ServiceRegistryConnection, ServiceRegistryError,
};

use crate::connection::new_connection;
use crate::implementation::SERVICE_REGISTRY_ARROWHEAD_4_6_1;

/// Where the registry lives, which dialect it speaks and how to authenticate.
///
/// Meant to be embedded in the host application's own configuration:
///
/// ```yaml
/// service_registry:
///   address: "serviceregistry.local"
///   port: 8443
///   implementation: "serviceregistry-arrowhead-4.6.1"
///   certificate_info:
///     cert_file_path: "/etc/pki/thermometer.pem"
///     key_file_path: "/etc/pki/thermometer.key"
///     truststore: "/etc/pki/truststore.pem"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceRegistryConfig {
    /// Registry host name or IP address.
    pub address: String,

    /// Registry port.
    pub port: u16,

    /// Dialect identifier (defaults to Arrowhead 4.6.1).
    #[serde(default = "default_implementation")]
    pub implementation: String,

    /// PEM files for mutual TLS.
    pub certificate_info: CertificateInfo,
}

fn default_implementation() -> String {
    SERVICE_REGISTRY_ARROWHEAD_4_6_1.to_owned()
}

impl ServiceRegistryConfig {
    #[must_use]
    pub fn target(&self) -> RegistryTarget {
        RegistryTarget::new(self.address.clone(), self.port)
    }

    /// Open a connection as configured.
    ///
    /// # Errors
    ///
    /// See [`new_connection`].
    pub async fn connect(&self) -> Result<Box<dyn ServiceRegistryConnection>, ServiceRegistryError> {
        new_connection(
            self.target(),
            &self.implementation,
            self.certificate_info.clone(),
        )
        .await
    }
}
