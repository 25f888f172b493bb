//! Throwaway PEM material for tests.

use crate::config::MutualTlsConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestPki {
    dir: TempDir,
}

impl TestPki {
    /// Writes a self-signed client identity and an unrelated CA certificate
    /// into a fresh temporary directory.
    pub fn generate() -> Self {
        let dir = TempDir::new().unwrap();

        let client = rcgen::generate_simple_self_signed(vec!["registry-client".to_owned()]).unwrap();
        let ca = rcgen::generate_simple_self_signed(vec!["registry.local".to_owned()]).unwrap();

        fs::write(dir.path().join("client.pem"), client.cert.pem()).unwrap();
        fs::write(dir.path().join("client.key"), client.key_pair.serialize_pem()).unwrap();
        fs::write(dir.path().join("truststore.pem"), ca.cert.pem()).unwrap();

        Self { dir }
    }

    pub fn cert_path(&self) -> PathBuf {
        self.dir.path().join("client.pem")
    }

    pub fn key_path(&self) -> PathBuf {
        self.dir.path().join("client.key")
    }

    pub fn trust_path(&self) -> PathBuf {
        self.dir.path().join("truststore.pem")
    }

    pub fn tls_config(&self) -> MutualTlsConfig {
        MutualTlsConfig::new(self.cert_path(), self.key_path(), self.trust_path())
    }
}
