//! Connection factory.

use arrowhead_sr_plugin::ArrowheadServiceRegistry;
use registry_http::TransportSecurity;
use service_registry_sdk::{
    CertificateInfo, RegistryTarget, ServiceRegistryConnection, ServiceRegistryError,
};

use crate::implementation::ServiceRegistryImplementationType;

/// Open a connection to the registry at `target` speaking the dialect named by
/// `implementation`.
///
/// The identifier is checked before anything touches the network. The returned
/// handle has already answered the dialect's liveness probe.
///
/// # Errors
///
/// - `UnsupportedImplementation` if `implementation` names no known dialect
/// - `Credentials` / `TrustStore` if the PEM files cannot be loaded
/// - `NotConnected` if the probe answer is wrong
/// - `Transport` / `UnexpectedStatus` if the probe fails on the wire
pub async fn new_connection(
    target: RegistryTarget,
    implementation: &str,
    certificate_info: CertificateInfo,
) -> Result<Box<dyn ServiceRegistryConnection>, ServiceRegistryError> {
    let implementation: ServiceRegistryImplementationType = implementation.parse()?;
    connect_implementation(target, implementation, certificate_info).await
}

/// Typed variant of [`new_connection`].
///
/// # Errors
///
/// Same as [`new_connection`], minus `UnsupportedImplementation`.
pub async fn connect_implementation(
    target: RegistryTarget,
    implementation: ServiceRegistryImplementationType,
    certificate_info: CertificateInfo,
) -> Result<Box<dyn ServiceRegistryConnection>, ServiceRegistryError> {
    establish(
        target,
        implementation,
        certificate_info,
        TransportSecurity::TlsOnly,
    )
    .await
}

/// Same as [`new_connection`] but over plain HTTP, for mock registries.
///
/// Certificate files are still loaded and validated.
///
/// Only available in debug builds or when the `allow-insecure-http` feature
/// is enabled.
///
/// # Errors
///
/// Same as [`new_connection`].
#[cfg(any(debug_assertions, feature = "allow-insecure-http"))]
pub async fn new_insecure_connection(
    target: RegistryTarget,
    implementation: &str,
    certificate_info: CertificateInfo,
) -> Result<Box<dyn ServiceRegistryConnection>, ServiceRegistryError> {
    let implementation: ServiceRegistryImplementationType = implementation.parse()?;
    tracing::warn!(
        target: "service_registry::security",
        %implementation,
        "opening service registry connection over plain HTTP"
    );
    establish(
        target,
        implementation,
        certificate_info,
        TransportSecurity::AllowInsecureHttp,
    )
    .await
}

async fn establish(
    target: RegistryTarget,
    implementation: ServiceRegistryImplementationType,
    certificate_info: CertificateInfo,
    transport: TransportSecurity,
) -> Result<Box<dyn ServiceRegistryConnection>, ServiceRegistryError> {
    let address = target.address.clone();
    let port = target.port;

    let connection: Box<dyn ServiceRegistryConnection> = match implementation {
        ServiceRegistryImplementationType::Arrowhead461 => Box::new(
            ArrowheadServiceRegistry::new(target, certificate_info)
                .with_transport_security(transport),
        ),
    };

    connection.connect().await?;

    tracing::info!(
        %implementation,
        %address,
        port,
        "connected to service registry"
    );
    Ok(connection)
}
