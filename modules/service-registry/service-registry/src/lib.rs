//! Service Registry
//!
//! Opens connections to a service registry and hides which dialect of its
//! REST API is spoken behind [`ServiceRegistryConnection`].
//!
//! ```ignore
//! use service_registry::{new_connection, CertificateInfo, RegistryTarget};
//!
//! let registry = new_connection(
//!     RegistryTarget::new("serviceregistry.local", 8443),
//!     "serviceregistry-arrowhead-4.6.1",
//!     CertificateInfo::new("thermometer.pem", "thermometer.key", "truststore.pem"),
//! )
//! .await?;
//!
//! registry.register_system(&system).await?;
//! ```
//!
//! Supported dialects are listed in [`ServiceRegistryImplementationType`].

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod connection;
pub mod implementation;

pub use config::ServiceRegistryConfig;
#[cfg(any(debug_assertions, feature = "allow-insecure-http"))]
pub use connection::new_insecure_connection;
pub use connection::{connect_implementation, new_connection};
pub use implementation::{SERVICE_REGISTRY_ARROWHEAD_4_6_1, ServiceRegistryImplementationType};

pub use service_registry_sdk::{
    CertificateInfo, QueryResult, RegistryTarget, ServiceDefinition, ServiceQueryResult,
    ServiceRegistryConnection, ServiceRegistryError, SystemDefinition,
};
