use std::env;
use std::path::PathBuf;

use crate::constants::{defaults, envvars};
use crate::interfaces::platform_path::{PathTable, CURRENT_PLATFORM};

/// External inputs to config generation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub local_gateway_address: String,
    pub local_interface: String,
    pub outbound_interface: String,
    pub baseline_config_path: PathBuf,
    pub platform: String,
    pub paths: PathTable,
}

fn env_or(var: &str, default: &str) -> String {
    match env::var(var) {
        Ok(val) if !val.trim().is_empty() => val.trim().to_string(),
        _ => default.to_string(),
    }
}

impl Settings {
    /// The gateway address has no default; an empty value is rejected when
    /// the generator is constructed.
    pub fn from_env() -> Self {
        Settings {
            local_gateway_address: env_or(envvars::LOCAL_GATEWAY_ADDRESS, ""),
            local_interface: env_or(envvars::LOCAL_INTERFACE, defaults::LOCAL_INTERFACE),
            outbound_interface: env_or(envvars::OUTBOUND_INTERFACE, defaults::OUTBOUND_INTERFACE),
            baseline_config_path: env_or(envvars::BASELINE_CONFIG_PATH, defaults::BASELINE_CONFIG_PATH)
                .into(),
            platform: env_or(envvars::PLATFORM, &CURRENT_PLATFORM),
            paths: PathTable::from_env(),
        }
    }
}
