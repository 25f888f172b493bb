//! Connection to an Arrowhead 4.6.1 service registry.

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use registry_http::{HttpClient, HttpClientBuilder, MutualTlsConfig, TransportSecurity};
use service_registry_sdk::{
    CertificateInfo, RegistryTarget, ServiceDefinition, ServiceQueryResult,
    ServiceRegistryConnection, ServiceRegistryError, SystemDefinition,
};

use crate::dto::{RegisterServiceRequest, ServiceQueryForm, ServiceQueryResponse};
use crate::error::{encode_error, map_http_error};

/// Body the registry answers the echo probe with.
pub const ECHO_ACK: &str = "Got it!";

/// The only interface this client registers and asks for.
pub const INTERFACE_HTTP_SECURE_JSON: &str = "HTTP-SECURE-JSON";

const INTERFACES: &[&str] = &[INTERFACE_HTTP_SECURE_JSON];

const ECHO_PATH: &str = "/serviceregistry/echo";
const REGISTER_PATH: &str = "/serviceregistry/register";
const UNREGISTER_PATH: &str = "/serviceregistry/unregister";
const REGISTER_SYSTEM_PATH: &str = "/serviceregistry/register-system";
const UNREGISTER_SYSTEM_PATH: &str = "/serviceregistry/unregister-system";
const QUERY_PATH: &str = "/serviceregistry/query";

/// Arrowhead 4.6.1 service registry connection.
///
/// Holds only the registry location and the credential paths. A fresh HTTPS
/// client is built for every call, so certificate files are re-read each time.
#[derive(Debug, Clone)]
pub struct ArrowheadServiceRegistry {
    target: RegistryTarget,
    certificate_info: CertificateInfo,
    transport: TransportSecurity,
}

impl ArrowheadServiceRegistry {
    #[must_use]
    pub fn new(target: RegistryTarget, certificate_info: CertificateInfo) -> Self {
        Self {
            target,
            certificate_info,
            transport: TransportSecurity::TlsOnly,
        }
    }

    /// Set transport security mode
    ///
    /// `TransportSecurity::AllowInsecureHttp` switches every URL to `http://`
    /// and is meant for mock registries only.
    #[must_use]
    pub fn with_transport_security(mut self, transport: TransportSecurity) -> Self {
        self.transport = transport;
        self
    }

    #[must_use]
    pub fn target(&self) -> &RegistryTarget {
        &self.target
    }

    fn http_client(&self) -> Result<HttpClient, ServiceRegistryError> {
        let tls = MutualTlsConfig::new(
            self.certificate_info.cert_file_path.clone(),
            self.certificate_info.key_file_path.clone(),
            self.certificate_info.truststore.clone(),
        );
        HttpClientBuilder::new(tls)
            .transport(self.transport)
            .build()
            .map_err(map_http_error)
    }

    fn url(&self, path: &str) -> String {
        let scheme = if self.transport == TransportSecurity::AllowInsecureHttp {
            "http"
        } else {
            "https"
        };
        let address = &self.target.address;
        if address.contains(':') && !address.starts_with('[') {
            format!("{scheme}://[{address}]:{}{path}", self.target.port)
        } else {
            format!("{scheme}://{address}:{}{path}", self.target.port)
        }
    }

    async fn echo(&self) -> Result<Bytes, ServiceRegistryError> {
        let client = self.http_client()?;
        client
            .get(&self.url(ECHO_PATH))
            .send()
            .await
            .map_err(map_http_error)?
            .bytes()
            .await
            .map_err(map_http_error)
    }

    async fn do_register_service(
        &self,
        service: &ServiceDefinition,
        system: &SystemDefinition,
    ) -> Result<Bytes, ServiceRegistryError> {
        let client = self.http_client()?;
        let body = RegisterServiceRequest {
            service,
            interfaces: INTERFACES,
            provider_system: system,
        };
        client
            .post(&self.url(REGISTER_PATH))
            .json(&body)
            .map_err(encode_error)?
            .send()
            .await
            .map_err(map_http_error)?
            .expect_status(StatusCode::CREATED)
            .await
            .map_err(map_http_error)
    }

    async fn do_unregister_service(
        &self,
        service: &ServiceDefinition,
        system: &SystemDefinition,
    ) -> Result<(), ServiceRegistryError> {
        let client = self.http_client()?;
        let port = system.port.to_string();
        client
            .delete(&self.url(UNREGISTER_PATH))
            .query(&[
                ("address", system.address.as_str()),
                ("port", port.as_str()),
                ("service_definition", service.service_definition.as_str()),
                ("service_uri", service.service_uri.as_str()),
                ("system_name", system.system_name.as_str()),
            ])
            .map_err(map_http_error)?
            .send()
            .await
            .map_err(map_http_error)?
            .expect_status(StatusCode::OK)
            .await
            .map_err(map_http_error)?;
        Ok(())
    }

    async fn do_register_system(
        &self,
        system: &SystemDefinition,
    ) -> Result<Bytes, ServiceRegistryError> {
        let client = self.http_client()?;
        client
            .post(&self.url(REGISTER_SYSTEM_PATH))
            .json(system)
            .map_err(encode_error)?
            .send()
            .await
            .map_err(map_http_error)?
            .expect_status(StatusCode::CREATED)
            .await
            .map_err(map_http_error)
    }

    async fn do_unregister_system(
        &self,
        system: &SystemDefinition,
    ) -> Result<(), ServiceRegistryError> {
        let client = self.http_client()?;
        let port = system.port.to_string();
        client
            .delete(&self.url(UNREGISTER_SYSTEM_PATH))
            .query(&[
                ("address", system.address.as_str()),
                ("port", port.as_str()),
                ("system_name", system.system_name.as_str()),
            ])
            .map_err(map_http_error)?
            .send()
            .await
            .map_err(map_http_error)?
            .expect_status(StatusCode::OK)
            .await
            .map_err(map_http_error)?;
        Ok(())
    }

    async fn do_query(
        &self,
        service: &ServiceDefinition,
    ) -> Result<ServiceQueryResult, ServiceRegistryError> {
        let client = self.http_client()?;
        let body = client
            .post(&self.url(QUERY_PATH))
            .json(&ServiceQueryForm::new(service, INTERFACES))
            .map_err(encode_error)?
            .send()
            .await
            .map_err(map_http_error)?
            .expect_status(StatusCode::OK)
            .await
            .map_err(map_http_error)?;

        let response: ServiceQueryResponse = serde_json::from_slice(&body)
            .map_err(|e| ServiceRegistryError::Decode(e.to_string()))?;
        Ok(response.into())
    }
}

#[async_trait]
impl ServiceRegistryConnection for ArrowheadServiceRegistry {
    async fn connect(&self) -> Result<(), ServiceRegistryError> {
        let body = self.echo().await?;
        if body.as_ref() != ECHO_ACK.as_bytes() {
            return Err(ServiceRegistryError::NotConnected(format!(
                "unexpected echo response: {:?}",
                String::from_utf8_lossy(&body)
            )));
        }
        Ok(())
    }

    async fn register_service(
        &self,
        service: &ServiceDefinition,
        system: &SystemDefinition,
    ) -> Result<Bytes, ServiceRegistryError> {
        self.do_register_service(service, system).await
    }

    async fn unregister_service(
        &self,
        service: &ServiceDefinition,
        system: &SystemDefinition,
    ) -> Result<(), ServiceRegistryError> {
        self.do_unregister_service(service, system).await
    }

    async fn register_system(
        &self,
        system: &SystemDefinition,
    ) -> Result<Bytes, ServiceRegistryError> {
        self.do_register_system(system).await
    }

    async fn unregister_system(
        &self,
        system: &SystemDefinition,
    ) -> Result<(), ServiceRegistryError> {
        self.do_unregister_system(system).await
    }

    async fn query(
        &self,
        service: &ServiceDefinition,
    ) -> Result<ServiceQueryResult, ServiceRegistryError> {
        self.do_query(service).await
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::test_support::{credentials, target_of};
    use httpmock::prelude::*;
    use serde_json::json;
    use service_registry_sdk::QueryResult;

    fn registry(server: &MockServer, info: &CertificateInfo) -> ArrowheadServiceRegistry {
        ArrowheadServiceRegistry::new(target_of(server), info.clone())
            .with_transport_security(TransportSecurity::AllowInsecureHttp)
    }

    fn thermometer() -> SystemDefinition {
        SystemDefinition::new("thermometer", "10.0.0.7", 8080)
    }

    fn temperature() -> ServiceDefinition {
        ServiceDefinition::new("temperature", "/temperature")
    }

    #[test]
    fn urls_follow_transport_security() {
        let creds = credentials();
        let secure = ArrowheadServiceRegistry::new(
            RegistryTarget::new("registry.local", 8443),
            creds.info.clone(),
        );
        assert_eq!(secure.url(ECHO_PATH), "https://registry.local:8443/serviceregistry/echo");

        let insecure = secure
            .clone()
            .with_transport_security(TransportSecurity::AllowInsecureHttp);
        assert_eq!(insecure.url(QUERY_PATH), "http://registry.local:8443/serviceregistry/query");

        let ipv6 = ArrowheadServiceRegistry::new(RegistryTarget::new("::1", 8443), creds.info);
        assert_eq!(ipv6.url(ECHO_PATH), "https://[::1]:8443/serviceregistry/echo");
    }

    #[tokio::test]
    async fn connect_accepts_exact_ack() {
        let creds = credentials();
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(Method::GET).path(ECHO_PATH);
            then.status(200).body(ECHO_ACK);
        });

        registry(&server, &creds.info).connect().await.unwrap();
        m.assert();
    }

    #[tokio::test]
    async fn connect_rejects_anything_else() {
        for body in ["Got it! ", "got it!", "Got it!\n", "", "OK"] {
            let creds = credentials();
            let server = MockServer::start();
            let _m = server.mock(|when, then| {
                when.method(Method::GET).path(ECHO_PATH);
                then.status(200).body(body);
            });

            let result = registry(&server, &creds.info).connect().await;
            assert!(
                matches!(result, Err(ServiceRegistryError::NotConnected(_))),
                "body {body:?} gave {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn connect_fails_on_bad_trust_store_without_network() {
        let creds = credentials();
        std::fs::write(&creds.info.truststore, "not a certificate").unwrap();
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(Method::GET).path(ECHO_PATH);
            then.status(200).body(ECHO_ACK);
        });

        let result = registry(&server, &creds.info).connect().await;
        assert!(matches!(result, Err(ServiceRegistryError::TrustStore(_))));
        m.assert_hits(0);
    }

    #[tokio::test]
    async fn connect_fails_on_missing_key() {
        let creds = credentials();
        std::fs::remove_file(&creds.info.key_file_path).unwrap();
        let server = MockServer::start();

        let result = registry(&server, &creds.info).connect().await;
        assert!(matches!(result, Err(ServiceRegistryError::Credentials(_))));
    }

    #[tokio::test]
    async fn register_service_returns_raw_body_on_created() {
        let creds = credentials();
        let server = MockServer::start();
        let raw = "{\"id\":42,\"serviceUri\":\"/temperature\"}";
        let m = server.mock(|when, then| {
            when.method(Method::POST)
                .path(REGISTER_PATH)
                .header("content-type", "application/json")
                .json_body(json!({
                    "serviceDefinition": "temperature",
                    "serviceUri": "/temperature",
                    "interfaces": ["HTTP-SECURE-JSON"],
                    "providerSystem": {
                        "systemName": "thermometer",
                        "address": "10.0.0.7",
                        "port": 8080
                    }
                }));
            then.status(201).body(raw);
        });

        let body = registry(&server, &creds.info)
            .register_service(&temperature(), &thermometer())
            .await
            .unwrap();

        m.assert();
        assert_eq!(&body[..], raw.as_bytes());
    }

    #[tokio::test]
    async fn register_service_requires_created() {
        let creds = credentials();
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(Method::POST).path(REGISTER_PATH);
            then.status(200).body("{\"id\":42}");
        });

        let result = registry(&server, &creds.info)
            .register_service(&temperature(), &thermometer())
            .await;

        match result {
            Err(ServiceRegistryError::UnexpectedStatus { status, body }) => {
                assert_eq!(status, StatusCode::OK);
                assert_eq!(body, "{\"id\":42}");
            }
            other => panic!("Expected UnexpectedStatus, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn register_service_error_message_carries_status_text() {
        let creds = credentials();
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(Method::POST).path(REGISTER_PATH);
            then.status(400)
                .body("{\"errorMessage\":\"Service already exists\"}");
        });

        let err = registry(&server, &creds.info)
            .register_service(&temperature(), &thermometer())
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "status: 400 Bad Request, body: {\"errorMessage\":\"Service already exists\"}"
        );
    }

    #[tokio::test]
    async fn unregister_service_encodes_all_five_keys() {
        let creds = credentials();
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(Method::DELETE)
                .path(UNREGISTER_PATH)
                .query_param("address", "10.0.0.7")
                .query_param("port", "8080")
                .query_param("service_definition", "temperature")
                .query_param("service_uri", "/a b")
                .query_param("system_name", "Sys&1");
            then.status(200);
        });

        let service = ServiceDefinition::new("temperature", "/a b");
        let system = SystemDefinition::new("Sys&1", "10.0.0.7", 8080);
        registry(&server, &creds.info)
            .unregister_service(&service, &system)
            .await
            .unwrap();

        m.assert();
    }

    #[tokio::test]
    async fn unregister_service_requires_ok() {
        let creds = credentials();
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(Method::DELETE).path(UNREGISTER_PATH);
            then.status(204);
        });

        let result = registry(&server, &creds.info)
            .unregister_service(&temperature(), &thermometer())
            .await;

        assert!(matches!(
            result,
            Err(ServiceRegistryError::UnexpectedStatus {
                status: StatusCode::NO_CONTENT,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn register_system_posts_system_json() {
        let creds = credentials();
        let server = MockServer::start();
        let raw = "{\"id\":5,\"systemName\":\"thermometer\"}";
        let m = server.mock(|when, then| {
            when.method(Method::POST)
                .path(REGISTER_SYSTEM_PATH)
                .header("content-type", "application/json")
                .json_body(json!({
                    "systemName": "thermometer",
                    "address": "10.0.0.7",
                    "port": 8080,
                    "authenticationInfo": "MIIBIjAN"
                }));
            then.status(201).body(raw);
        });

        let system = thermometer().with_authentication_info("MIIBIjAN");
        let body = registry(&server, &creds.info)
            .register_system(&system)
            .await
            .unwrap();

        m.assert();
        assert_eq!(&body[..], raw.as_bytes());
    }

    #[tokio::test]
    async fn register_system_requires_created() {
        let creds = credentials();
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(Method::POST).path(REGISTER_SYSTEM_PATH);
            then.status(500).body("boom");
        });

        let result = registry(&server, &creds.info)
            .register_system(&thermometer())
            .await;

        match result {
            Err(ServiceRegistryError::UnexpectedStatus { status, body }) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "boom");
            }
            other => panic!("Expected UnexpectedStatus, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unregister_system_sends_three_keys() {
        let creds = credentials();
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(Method::DELETE)
                .path(UNREGISTER_SYSTEM_PATH)
                .query_param("address", "10.0.0.7")
                .query_param("port", "8080")
                .query_param("system_name", "thermometer");
            then.status(200);
        });

        registry(&server, &creds.info)
            .unregister_system(&thermometer())
            .await
            .unwrap();

        m.assert();
    }

    #[tokio::test]
    async fn unregister_system_requires_ok() {
        let creds = credentials();
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(Method::DELETE).path(UNREGISTER_SYSTEM_PATH);
            then.status(404).body("not found");
        });

        let err = registry(&server, &creds.info)
            .unregister_system(&thermometer())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "status: 404 Not Found, body: not found");
    }

    #[tokio::test]
    async fn query_decodes_providers() {
        let creds = credentials();
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(Method::POST).path(QUERY_PATH).json_body(json!({
                "serviceDefinitionRequirement": "temperature",
                "interfaceRequirements": ["HTTP-SECURE-JSON"]
            }));
            then.status(200).json_body(json!({
                "serviceQueryData": [{
                    "id": 1,
                    "serviceDefinition": {"id": 3, "serviceDefinition": "temperature"},
                    "provider": {
                        "id": 5,
                        "systemName": "thermometer",
                        "address": "10.0.0.7",
                        "port": 8080
                    },
                    "serviceUri": "/temperature",
                    "version": 1
                }],
                "unfilteredHits": 1
            }));
        });

        let result = registry(&server, &creds.info)
            .query(&temperature())
            .await
            .unwrap();

        m.assert();
        assert_eq!(
            result.service_query_data,
            vec![QueryResult {
                provider: thermometer(),
                service: temperature().with_version(1),
            }]
        );
    }

    #[tokio::test]
    async fn query_with_no_providers_is_empty() {
        let creds = credentials();
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(Method::POST).path(QUERY_PATH);
            then.status(200)
                .json_body(json!({"serviceQueryData": [], "unfilteredHits": 0}));
        });

        let result = registry(&server, &creds.info)
            .query(&temperature())
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn query_rejects_malformed_body() {
        let creds = credentials();
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(Method::POST).path(QUERY_PATH);
            then.status(200).body("{\"serviceQueryData\": [{\"provider\": 7}]}");
        });

        let result = registry(&server, &creds.info).query(&temperature()).await;
        assert!(matches!(result, Err(ServiceRegistryError::Decode(_))));
    }

    #[tokio::test]
    async fn query_requires_ok() {
        let creds = credentials();
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(Method::POST).path(QUERY_PATH);
            then.status(401).body("unauthorized");
        });

        let result = registry(&server, &creds.info).query(&temperature()).await;
        assert!(matches!(
            result,
            Err(ServiceRegistryError::UnexpectedStatus {
                status: StatusCode::UNAUTHORIZED,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn plain_http_is_refused_when_tls_only() {
        let creds = credentials();
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(Method::GET).path(ECHO_PATH);
            then.status(200).body(ECHO_ACK);
        });

        // TLS-only client speaks TLS to a plain HTTP server and never gets an answer.
        let result = ArrowheadServiceRegistry::new(target_of(&server), creds.info.clone())
            .connect()
            .await;

        assert!(matches!(result, Err(ServiceRegistryError::Transport(_))));
        m.assert_hits(0);
    }
}
