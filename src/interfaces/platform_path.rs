use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::constants::envvars;

pub const LINUX: &str = "linux";
pub const DARWIN: &str = "darwin";
pub const SUPPORTED_PLATFORMS: &[&str] = &[LINUX, DARWIN];

/// Platform identifier of the running host, using `darwin` rather than
/// Rust's `macos`.
pub static CURRENT_PLATFORM: Lazy<String> = Lazy::new(|| match env::consts::OS {
    "macos" => DARWIN.to_string(),
    os => os.to_string(),
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigTarget {
    HostapdConf,
    GatewayAgentConf,
}

impl ConfigTarget {
    pub const ALL: [ConfigTarget; 2] = [ConfigTarget::HostapdConf, ConfigTarget::GatewayAgentConf];

    pub fn name(&self) -> &'static str {
        match self {
            ConfigTarget::HostapdConf => "hostapd_conf",
            ConfigTarget::GatewayAgentConf => "gateway_agent_conf",
        }
    }
}

impl fmt::Display for ConfigTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigTarget {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigTarget::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| PathError::UnknownTarget(s.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("no configuration target named '{0}'")]
    UnknownTarget(String),
    #[error("{target} is not applicable on platform '{platform}'")]
    UnmappedPlatform {
        target: ConfigTarget,
        platform: String,
    },
}

const DEFAULT_PATHS: &[(ConfigTarget, &str, &str)] = &[
    (ConfigTarget::HostapdConf, LINUX, "/etc/hostapd/hostapd.conf"),
    (ConfigTarget::GatewayAgentConf, LINUX, "/etc/gateway-agent/config.json"),
    (ConfigTarget::GatewayAgentConf, DARWIN, "/usr/local/etc/gateway-agent/config.json"),
];

/// Maps (target, platform) pairs to absolute paths. Lookups never touch the
/// filesystem.
#[derive(Debug, Clone, Default)]
pub struct PathTable(HashMap<(ConfigTarget, String), PathBuf>);

impl PathTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut table = Self::empty();
        for (target, platform, path) in DEFAULT_PATHS {
            table.insert(*target, *platform, *path);
        }
        table
    }

    /// Built-in table with any `GWCONF_<TARGET>_PATH_<PLATFORM>` overrides
    /// applied. Only supported platforms are consulted.
    pub fn from_env() -> Self {
        let mut table = Self::with_defaults();
        for target in ConfigTarget::ALL {
            for platform in SUPPORTED_PLATFORMS {
                let var = override_var(target, platform);
                if let Ok(path) = env::var(&var) {
                    if path.trim().is_empty() {
                        continue;
                    }
                    log::debug!("Using {var}={path} for {target} on {platform}");
                    table.insert(target, *platform, path.trim());
                }
            }
        }
        table
    }

    /// Platforms outside `SUPPORTED_PLATFORMS` are ignored.
    pub fn insert(&mut self, target: ConfigTarget, platform: &str, path: impl Into<PathBuf>) {
        if !SUPPORTED_PLATFORMS.contains(&platform) {
            log::warn!("Ignoring path for {target} on unsupported platform '{platform}'");
            return;
        }
        self.0.insert((target, platform.to_string()), path.into());
    }

    pub fn resolve(&self, target: ConfigTarget, platform: &str) -> Result<&Path, PathError> {
        match self.0.get(&(target, platform.to_string())) {
            Some(path) => Ok(path.as_path()),
            None => {
                log::debug!("No path configured for {target} on platform '{platform}'");
                Err(PathError::UnmappedPlatform {
                    target,
                    platform: platform.to_string(),
                })
            }
        }
    }

    pub fn resolve_name(&self, target_name: &str, platform: &str) -> Result<&Path, PathError> {
        let target = target_name.parse::<ConfigTarget>().map_err(|e| {
            log::debug!("Unknown configuration target '{target_name}'");
            e
        })?;
        self.resolve(target, platform)
    }
}

pub fn override_var(target: ConfigTarget, platform: &str) -> String {
    format!(
        "{}{}_PATH_{}",
        envvars::PATH_OVERRIDE_PREFIX,
        target.name().to_uppercase(),
        platform.to_uppercase()
    )
}
