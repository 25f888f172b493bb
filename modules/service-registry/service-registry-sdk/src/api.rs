//! Capability trait for service registry connections.
//!
//! Each supported registry dialect ships one type implementing
//! [`ServiceRegistryConnection`]. Callers hold a `Box<dyn ServiceRegistryConnection>`
//! and never depend on which dialect sits behind it.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::ServiceRegistryError;
use crate::models::{ServiceDefinition, ServiceQueryResult, SystemDefinition};

/// Operations every registry dialect must provide.
///
/// Every method performs exactly one round trip to the registry. Nothing is
/// retried, cached, or remembered between calls: the registry is the source of
/// truth for what is registered.
#[async_trait]
pub trait ServiceRegistryConnection: Send + Sync {
    /// Probe the registry.
    ///
    /// # Errors
    ///
    /// - `NotConnected` if the registry answered with anything other than the
    ///   dialect's acknowledgment
    /// - `Transport` / `Credentials` / `TrustStore` if the probe could not be sent
    async fn connect(&self) -> Result<(), ServiceRegistryError>;

    /// Register `service` as provided by `system`.
    ///
    /// Returns the registry's response body unchanged.
    ///
    /// # Errors
    ///
    /// - `UnexpectedStatus` if the registry did not answer with "created"
    async fn register_service(
        &self,
        service: &ServiceDefinition,
        system: &SystemDefinition,
    ) -> Result<Bytes, ServiceRegistryError>;

    /// Remove the registration of `service` provided by `system`.
    ///
    /// # Errors
    ///
    /// - `UnexpectedStatus` if the registry did not answer with "ok"
    async fn unregister_service(
        &self,
        service: &ServiceDefinition,
        system: &SystemDefinition,
    ) -> Result<(), ServiceRegistryError>;

    /// Register a provider system.
    ///
    /// Returns the registry's response body unchanged.
    ///
    /// # Errors
    ///
    /// - `UnexpectedStatus` if the registry did not answer with "created"
    async fn register_system(
        &self,
        system: &SystemDefinition,
    ) -> Result<Bytes, ServiceRegistryError>;

    /// Remove a provider system.
    ///
    /// # Errors
    ///
    /// - `UnexpectedStatus` if the registry did not answer with "ok"
    async fn unregister_system(&self, system: &SystemDefinition)
    -> Result<(), ServiceRegistryError>;

    /// Look up the providers of `service`.
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    ///
    /// - `UnexpectedStatus` on a non-matching status
    /// - `Decode` if the body is not a valid query response
    async fn query(
        &self,
        service: &ServiceDefinition,
    ) -> Result<ServiceQueryResult, ServiceRegistryError>;
}
