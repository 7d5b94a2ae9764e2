pub mod gateway_agent;
pub mod hostapd;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::helpers::settings::Settings;
use crate::interfaces::config_file::{ConfigFileError, ConfigFiles, ConfigFs, LocalFs};
use crate::interfaces::hwaddr::{HwAddrLookup, SystemHwAddr};
use crate::interfaces::platform_path::ConfigTarget;
use crate::node_mgmt::gateway_id::{GatewayIdResolver, IdentityError};

use gateway_agent::{LocalNetwork, CONNECTOR_TYPES_FIELD};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("invalid generator input: {0}")]
    InvalidInput(&'static str),
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    ConfigFile(#[from] ConfigFileError),
    #[error("baseline config {path} has no '{field}' field")]
    Baseline { path: PathBuf, field: &'static str },
    #[error("could not serialize gateway agent config: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct Generated {
    pub hostapd: Result<PathBuf, GenerateError>,
    pub gateway_agent: Result<PathBuf, GenerateError>,
}

impl Generated {
    /// Both paths, or the first error in target order.
    pub fn into_result(self) -> Result<(PathBuf, PathBuf), GenerateError> {
        Ok((self.hostapd?, self.gateway_agent?))
    }
}

/// Produces the access-point and gateway agent configuration files.
///
/// Each generation runs its stages strictly in sequence and stops at the
/// first error. Separate generations may run concurrently and share the
/// cached gateway ID.
pub struct ConfigGenerator {
    local_gateway_address: String,
    local_interface: String,
    baseline_config_path: PathBuf,
    identity: GatewayIdResolver,
    files: ConfigFiles,
}

impl ConfigGenerator {
    pub fn new(
        settings: Settings,
        lookup: Arc<dyn HwAddrLookup>,
        fs: Arc<dyn ConfigFs>,
    ) -> Result<Self, GenerateError> {
        let local_gateway_address = settings.local_gateway_address.trim();
        if local_gateway_address.is_empty() {
            log::error!("Local gateway address is not configured");
            return Err(GenerateError::InvalidInput("local gateway address must not be empty"));
        }
        if settings.outbound_interface.trim().is_empty() {
            log::error!("Outbound interface is not configured");
            return Err(GenerateError::InvalidInput("outbound interface must not be empty"));
        }

        Ok(ConfigGenerator {
            local_gateway_address: local_gateway_address.to_string(),
            local_interface: settings.local_interface,
            baseline_config_path: settings.baseline_config_path,
            identity: GatewayIdResolver::new(lookup, settings.outbound_interface.trim()),
            files: ConfigFiles::new(fs, settings.paths, settings.platform),
        })
    }

    /// Generator wired to the host's network interfaces and filesystem.
    pub fn from_env() -> Result<Self, GenerateError> {
        Self::new(Settings::from_env(), Arc::new(SystemHwAddr), Arc::new(LocalFs))
    }

    pub async fn gateway_id(&self) -> Result<&str, GenerateError> {
        self.identity.gateway_id().await.map_err(Into::into)
    }

    pub async fn generate_hostapd_config(&self) -> Result<PathBuf, GenerateError> {
        let gateway_id = self.gateway_id().await?;
        let text = hostapd::render(gateway_id);
        let path = self.files.write_config(ConfigTarget::HostapdConf, text).await?;
        log::info!("Generated access point config for {gateway_id}");
        Ok(path)
    }

    pub async fn generate_gateway_agent_config(&self) -> Result<PathBuf, GenerateError> {
        let gateway_id = self.gateway_id().await?;
        let baseline = self.files.read_json(&self.baseline_config_path).await?;

        let network = LocalNetwork {
            gateway_address: &self.local_gateway_address,
            interface: &self.local_interface,
        };
        let config = gateway_agent::build(gateway_id, &baseline, &network).ok_or_else(|| {
            log::error!(
                "Baseline config {} has no {CONNECTOR_TYPES_FIELD}",
                self.baseline_config_path.display()
            );
            GenerateError::Baseline {
                path: self.baseline_config_path.clone(),
                field: CONNECTOR_TYPES_FIELD,
            }
        })?;
        let payload = gateway_agent::to_json(&config).map_err(|e| {
            log::error!("Could not serialize gateway agent config: {e}");
            e
        })?;

        let path = self
            .files
            .write_config(ConfigTarget::GatewayAgentConf, payload)
            .await?;
        log::info!("Generated gateway agent config for {gateway_id}");
        Ok(path)
    }

    /// Runs both generations concurrently. Each runs to completion whatever
    /// the other's outcome.
    pub async fn generate_all(&self) -> Generated {
        let (hostapd, gateway_agent) = tokio::join!(
            self.generate_hostapd_config(),
            self.generate_gateway_agent_config()
        );
        Generated {
            hostapd,
            gateway_agent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::hwaddr::HwAddrError;
    use crate::interfaces::platform_path::{PathTable, LINUX};

    struct NoLookup;

    #[async_trait::async_trait]
    impl HwAddrLookup for NoLookup {
        async fn mac_address(&self, interface_name: &str) -> Result<String, HwAddrError> {
            Err(HwAddrError::NotFound(interface_name.to_string()))
        }
    }

    fn settings(gateway_address: &str) -> Settings {
        Settings {
            local_gateway_address: gateway_address.to_string(),
            local_interface: "wlan0".to_string(),
            outbound_interface: "eth0".to_string(),
            baseline_config_path: PathBuf::from("/nonexistent/baseline.json"),
            platform: LINUX.to_string(),
            paths: PathTable::with_defaults(),
        }
    }

    #[test]
    fn rejects_empty_gateway_address() {
        for address in ["", "   "] {
            let res = ConfigGenerator::new(settings(address), Arc::new(NoLookup), Arc::new(LocalFs));
            assert!(matches!(res, Err(GenerateError::InvalidInput(_))));
        }
    }

    #[test]
    fn rejects_empty_outbound_interface() {
        let mut settings = settings("192.168.4.1");
        settings.outbound_interface = String::new();
        let res = ConfigGenerator::new(settings, Arc::new(NoLookup), Arc::new(LocalFs));
        assert!(matches!(res, Err(GenerateError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn identity_failure_propagates() {
        let generator =
            ConfigGenerator::new(settings("192.168.4.1"), Arc::new(NoLookup), Arc::new(LocalFs))
                .unwrap();
        assert!(matches!(
            generator.generate_hostapd_config().await,
            Err(GenerateError::Identity(_))
        ));
        assert!(matches!(
            generator.generate_gateway_agent_config().await,
            Err(GenerateError::Identity(_))
        ));
    }
}
