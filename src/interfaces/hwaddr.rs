use async_trait::async_trait;
use itertools::Itertools;
use nix::ifaddrs::getifaddrs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HwAddrError {
    #[error("could not list network interfaces: {0}")]
    Interfaces(#[from] nix::Error),
    #[error("interface '{0}' has no hardware address")]
    NotFound(String),
    #[error("hardware address lookup did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Looks up the hardware (MAC) address of a named network interface.
///
/// Implementations return the address in the conventional colon-separated
/// form, e.g. `aa:bb:cc:dd:ee:ff`.
#[async_trait]
pub trait HwAddrLookup: Send + Sync {
    async fn mac_address(&self, interface_name: &str) -> Result<String, HwAddrError>;
}

/// Reads link-layer addresses from the host via `getifaddrs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHwAddr;

#[async_trait]
impl HwAddrLookup for SystemHwAddr {
    async fn mac_address(&self, interface_name: &str) -> Result<String, HwAddrError> {
        let name = interface_name.to_string();
        let mac = tokio::task::spawn_blocking(move || find_interface_mac(&name)).await??;
        Ok(format_mac(&mac))
    }
}

fn find_interface_mac(interface_name: &str) -> Result<[u8; 6], HwAddrError> {
    // An interface is listed once per address family; only the link-layer
    // entry carries the MAC
    for interface in getifaddrs()? {
        if interface.interface_name != interface_name {
            continue;
        }
        let mac = interface
            .address
            .as_ref()
            .and_then(|addr| addr.as_link_addr())
            .and_then(|link| link.addr());
        if let Some(mac) = mac {
            log::debug!("Found MAC {} for {}", hex::encode(mac), interface_name);
            return Ok(mac);
        }
    }
    Err(HwAddrError::NotFound(interface_name.to_string()))
}

fn format_mac(mac: &[u8; 6]) -> String {
    mac.iter().map(|b| hex::encode([*b])).join(":")
}
