//! Service Registry SDK
//!
//! This crate provides the public API for service registry connections:
//!
//! - [`ServiceRegistryConnection`] - Capability trait every registry dialect implements
//! - [`ServiceDefinition`], [`SystemDefinition`], [`RegistryTarget`] - Entity descriptors
//! - [`CertificateInfo`] - Credential bundle (PEM paths) for mutual TLS
//! - [`ServiceQueryResult`], [`QueryResult`] - Query results
//! - [`ServiceRegistryError`] - Error types
//!
//! ## Usage
//!
//! Consumers obtain a connection from the `service-registry` factory and only
//! ever talk to it through the trait:
//!
//! ```ignore
//! use service_registry_sdk::{ServiceDefinition, ServiceRegistryConnection, SystemDefinition};
//!
//! let system = SystemDefinition::new("thermometer", "10.0.0.7", 8080);
//! let service = ServiceDefinition::new("temperature", "/temperature");
//!
//! registry.register_system(&system).await?;
//! registry.register_service(&service, &system).await?;
//!
//! let providers = registry.query(&service).await?;
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::ServiceRegistryConnection;
pub use error::ServiceRegistryError;
pub use models::{
    CertificateInfo, QueryResult, RegistryTarget, ServiceDefinition, ServiceQueryResult,
    SystemDefinition,
};
