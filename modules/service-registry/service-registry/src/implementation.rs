//! Registry dialect identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use service_registry_sdk::ServiceRegistryError;

/// Tag of the Arrowhead 4.6.1 dialect.
pub const SERVICE_REGISTRY_ARROWHEAD_4_6_1: &str = "serviceregistry-arrowhead-4.6.1";

/// Registry dialects this library can talk to.
///
/// Each variant owns a stable string tag. Tags are never reinterpreted; a new
/// dialect gets a new variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ServiceRegistryImplementationType {
    #[default]
    #[serde(rename = "serviceregistry-arrowhead-4.6.1")]
    Arrowhead461,
}

impl ServiceRegistryImplementationType {
    /// All known dialects.
    pub const ALL: &'static [Self] = &[Self::Arrowhead461];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arrowhead461 => SERVICE_REGISTRY_ARROWHEAD_4_6_1,
        }
    }
}

impl fmt::Display for ServiceRegistryImplementationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceRegistryImplementationType {
    type Err = ServiceRegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|implementation| implementation.as_str() == s)
            .ok_or_else(|| ServiceRegistryError::UnsupportedImplementation(s.to_owned()))
    }
}
