//! Arrowhead 4.6.1 wire types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use service_registry_sdk::{QueryResult, ServiceDefinition, ServiceQueryResult, SystemDefinition};

/// Body of `POST /serviceregistry/register`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterServiceRequest<'a> {
    #[serde(flatten)]
    pub service: &'a ServiceDefinition,
    pub interfaces: &'a [&'a str],
    pub provider_system: &'a SystemDefinition,
}

/// Body of `POST /serviceregistry/query`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceQueryForm<'a> {
    pub service_definition_requirement: &'a str,
    pub interface_requirements: &'a [&'a str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_requirements: Option<&'a BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_requirement: Option<u32>,
}

impl<'a> ServiceQueryForm<'a> {
    pub fn new(service: &'a ServiceDefinition, interfaces: &'a [&'a str]) -> Self {
        Self {
            service_definition_requirement: &service.service_definition,
            interface_requirements: interfaces,
            metadata_requirements: (!service.metadata.is_empty()).then_some(&service.metadata),
            version_requirement: service.version,
        }
    }
}

/// Body returned by `POST /serviceregistry/query`.
///
/// Registries answer with the `serviceQueryData` envelope; a bare list of
/// entries is accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ServiceQueryResponse {
    List(Vec<ServiceRegistryEntry>),
    Envelope {
        #[serde(rename = "serviceQueryData")]
        service_query_data: Vec<ServiceRegistryEntry>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRegistryEntry {
    pub service_definition: ServiceDefinitionEntry,
    pub provider: SystemDefinition,
    pub service_uri: String,
    #[serde(default)]
    pub metadata: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub version: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinitionEntry {
    pub service_definition: String,
}

impl From<ServiceRegistryEntry> for QueryResult {
    fn from(entry: ServiceRegistryEntry) -> Self {
        Self {
            provider: entry.provider,
            service: ServiceDefinition {
                service_definition: entry.service_definition.service_definition,
                service_uri: entry.service_uri,
                metadata: entry.metadata.unwrap_or_default(),
                version: entry.version,
            },
        }
    }
}

impl From<ServiceQueryResponse> for ServiceQueryResult {
    fn from(response: ServiceQueryResponse) -> Self {
        let entries = match response {
            ServiceQueryResponse::List(entries)
            | ServiceQueryResponse::Envelope {
                service_query_data: entries,
            } => entries,
        };
        Self {
            service_query_data: entries.into_iter().map(QueryResult::from).collect(),
        }
    }
}
