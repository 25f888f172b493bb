#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![warn(warnings)]

//! Mutual-TLS HTTP client for service registry connections
//!
//! This crate provides a hyper-based HTTPS client with:
//! - Client certificate authentication via rustls (HTTPS only by default)
//! - Server verification against a caller-supplied trust bundle only
//!   (no OS or webpki roots are ever consulted)
//! - A fixed short request timeout
//! - User-Agent header injection
//! - Exact-status response checks that keep the raw body for diagnostics
//!
//! There are no retries and no redirects: every request is a single round trip.
//!
//! # Example
//!
//! ```ignore
//! use registry_http::{HttpClientBuilder, MutualTlsConfig};
//!
//! let tls = MutualTlsConfig::new("client.pem", "client.key", "truststore.pem");
//! let client = HttpClientBuilder::new(tls).build()?;
//!
//! let body = client
//!     .delete("https://registry:8443/serviceregistry/unregister-system")
//!     .query(&[("address", "10.0.0.7"), ("port", "8080"), ("system_name", "sensor")])?
//!     .send()
//!     .await?
//!     .expect_status(http::StatusCode::OK)
//!     .await?;
//! ```

mod builder;
mod client;
mod config;
mod error;
mod layers;
mod request;
mod response;
mod tls;

#[cfg(test)]
mod test_pki;

pub use builder::HttpClientBuilder;
pub use client::HttpClient;
pub use config::{
    DEFAULT_MAX_BODY_SIZE, DEFAULT_REQUEST_TIMEOUT, DEFAULT_USER_AGENT, HttpClientConfig,
    MutualTlsConfig, TransportSecurity,
};
pub use error::{HttpError, InvalidUriKind};
pub use layers::{UserAgentLayer, UserAgentService};
pub use request::RequestBuilder;
pub use response::{HttpResponse, ResponseBody};
pub use tls::mutual_tls_client_config;
