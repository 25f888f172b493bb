//! Arrowhead 4.6.1 Service Registry Plugin
//!
//! Implements [`ServiceRegistryConnection`](service_registry_sdk::ServiceRegistryConnection)
//! against the REST API of an Arrowhead 4.6.1 service registry core system.
//!
//! ## REST surface
//!
//! | Operation            | Request                                   | Success        |
//! |----------------------|-------------------------------------------|----------------|
//! | `connect`            | `GET /serviceregistry/echo`               | body `Got it!` |
//! | `register_service`   | `POST /serviceregistry/register`          | `201`          |
//! | `unregister_service` | `DELETE /serviceregistry/unregister`      | `200`          |
//! | `register_system`    | `POST /serviceregistry/register-system`   | `201`          |
//! | `unregister_system`  | `DELETE /serviceregistry/unregister-system` | `200`        |
//! | `query`              | `POST /serviceregistry/query`             | `200`          |
//!
//! All calls use mutual TLS with the configured client certificate, and the
//! registry certificate is verified against the configured trust bundle only.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod client;
mod dto;
mod error;

#[cfg(test)]
mod test_support;

pub use client::{ArrowheadServiceRegistry, ECHO_ACK, INTERFACE_HTTP_SECURE_JSON};
