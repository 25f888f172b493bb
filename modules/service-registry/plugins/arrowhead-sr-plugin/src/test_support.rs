use std::fs;

use service_registry_sdk::{CertificateInfo, RegistryTarget};
use tempfile::TempDir;

/// Self-signed client identity plus an unrelated CA, written to a temp dir.
pub struct Credentials {
    _dir: TempDir,
    pub info: CertificateInfo,
}

pub fn credentials() -> Credentials {
    let dir = TempDir::new().unwrap();
    let client = rcgen::generate_simple_self_signed(vec!["thermometer".to_owned()]).unwrap();
    let ca = rcgen::generate_simple_self_signed(vec!["serviceregistry".to_owned()]).unwrap();

    let cert = dir.path().join("client.pem");
    let key = dir.path().join("client.key");
    let trust = dir.path().join("truststore.pem");
    fs::write(&cert, client.cert.pem()).unwrap();
    fs::write(&key, client.key_pair.serialize_pem()).unwrap();
    fs::write(&trust, ca.cert.pem()).unwrap();

    Credentials {
        _dir: dir,
        info: CertificateInfo::new(cert, key, trust),
    }
}

pub fn target_of(server: &httpmock::MockServer) -> RegistryTarget {
    let addr = server.address();
    RegistryTarget::new(addr.ip().to_string(), addr.port())
}
