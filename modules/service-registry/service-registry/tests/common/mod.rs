#![allow(dead_code)]

use std::fs;

use httpmock::MockServer;
use service_registry::{CertificateInfo, RegistryTarget};
use tempfile::TempDir;

/// PEM files for one test: a self-signed client identity and an unrelated CA.
pub struct TestCredentials {
    _dir: TempDir,
    pub info: CertificateInfo,
}

pub fn test_credentials() -> TestCredentials {
    let dir = TempDir::new().unwrap();
    let client = rcgen::generate_simple_self_signed(vec!["thermometer".to_owned()]).unwrap();
    let ca = rcgen::generate_simple_self_signed(vec!["serviceregistry".to_owned()]).unwrap();

    let cert = dir.path().join("thermometer.pem");
    let key = dir.path().join("thermometer.key");
    let trust = dir.path().join("truststore.pem");
    fs::write(&cert, client.cert.pem()).unwrap();
    fs::write(&key, client.key_pair.serialize_pem()).unwrap();
    fs::write(&trust, ca.cert.pem()).unwrap();

    TestCredentials {
        _dir: dir,
        info: CertificateInfo::new(cert, key, trust),
    }
}

pub fn target_of(server: &MockServer) -> RegistryTarget {
    let addr = server.address();
    RegistryTarget::new(addr.ip().to_string(), addr.port())
}
