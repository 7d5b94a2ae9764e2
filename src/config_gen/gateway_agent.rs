use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::constants::defaults;

pub const CONNECTOR_TYPES_FIELD: &str = "connectorTypes";
pub const CLOUD_CONNECTOR_TYPE: &str = "mqtt";
pub const DEVICE_CONNECTOR_TYPE: &str = "gateway";

const INDENT: &[u8] = b"    ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayAgentConfig {
    pub connector_types: Value,
    pub device_connectors: BTreeMap<String, Connector<DeviceConnectorConfig>>,
    pub cloud_connectors: BTreeMap<String, Connector<CloudConnectorConfig>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector<C> {
    #[serde(rename = "type")]
    pub connector_type: String,
    pub config: C,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceConnectorConfig {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudConnectorConfig {
    pub host: String,
    pub port: u16,
    pub protocol: String,
    pub account: String,
    pub gateway_name: String,
    pub interface: String,
    pub topics: Vec<String>,
}

/// Where the cloud connector reaches the local broker.
#[derive(Debug, Clone)]
pub struct LocalNetwork<'a> {
    pub gateway_address: &'a str,
    pub interface: &'a str,
}

pub fn cloud_connector_name(gateway_id: &str) -> String {
    format!("{gateway_id}-cnc-cloud")
}

pub fn device_connector_name(gateway_id: &str) -> String {
    format!("{gateway_id}-cnc-gateway")
}

/// Combines the baseline document with the gateway ID. Returns `None` if
/// the baseline has no `connectorTypes`.
pub fn build(
    gateway_id: &str,
    baseline: &Value,
    network: &LocalNetwork,
) -> Option<GatewayAgentConfig> {
    let connector_types = baseline.get(CONNECTOR_TYPES_FIELD)?.clone();

    let cloud = Connector {
        connector_type: CLOUD_CONNECTOR_TYPE.to_string(),
        config: CloudConnectorConfig {
            host: network.gateway_address.to_string(),
            port: defaults::MQTT_PORT,
            protocol: defaults::MQTT_PROTOCOL.to_string(),
            account: gateway_id.to_string(),
            gateway_name: gateway_id.to_string(),
            interface: network.interface.to_string(),
            topics: Vec::new(),
        },
    };
    let device = Connector {
        connector_type: DEVICE_CONNECTOR_TYPE.to_string(),
        config: DeviceConnectorConfig::default(),
    };

    Some(GatewayAgentConfig {
        connector_types,
        device_connectors: BTreeMap::from([(device_connector_name(gateway_id), device)]),
        cloud_connectors: BTreeMap::from([(cloud_connector_name(gateway_id), cloud)]),
    })
}

/// Serializes with four-space indentation.
pub fn to_json(config: &GatewayAgentConfig) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    config.serialize(&mut ser)?;
    Ok(buf)
}
