use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;

use crate::interfaces::hwaddr::{HwAddrError, HwAddrLookup};

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("could not read hardware address of '{interface}': {source}")]
    Lookup {
        interface: String,
        #[source]
        source: HwAddrError,
    },
}

/// Derives the gateway ID from the MAC address of the outbound interface.
///
/// The ID is looked up at most once per resolver. Concurrent first callers
/// wait on the same lookup; a failed lookup is not remembered, so the next
/// call tries again.
pub struct GatewayIdResolver {
    lookup: Arc<dyn HwAddrLookup>,
    interface_name: String,
    gateway_id: OnceCell<String>,
}

impl GatewayIdResolver {
    pub fn new(lookup: Arc<dyn HwAddrLookup>, interface_name: impl Into<String>) -> Self {
        Self {
            lookup,
            interface_name: interface_name.into(),
            gateway_id: OnceCell::new(),
        }
    }

    pub async fn gateway_id(&self) -> Result<&str, IdentityError> {
        self.gateway_id
            .get_or_try_init(|| self.resolve())
            .await
            .map(String::as_str)
    }

    async fn resolve(&self) -> Result<String, IdentityError> {
        log::debug!("Looking up MAC address of {}", self.interface_name);
        let mac = self
            .lookup
            .mac_address(&self.interface_name)
            .await
            .map_err(|source| {
                log::error!(
                    "Could not obtain gateway ID from {}: {}",
                    self.interface_name,
                    source
                );
                IdentityError::Lookup {
                    interface: self.interface_name.clone(),
                    source,
                }
            })?;

        let gateway_id = normalize_mac(&mac);
        log::info!("Gateway ID is {gateway_id}");
        Ok(gateway_id)
    }
}

/// Strips colon separators and upper-cases. The input is not validated;
/// anything other than 12 hex digits afterwards is only warned about.
pub fn normalize_mac(mac: &str) -> String {
    let id = mac.replace(':', "").to_uppercase();
    if id.len() != 12 || !id.chars().all(|c| c.is_ascii_hexdigit()) {
        log::warn!("Hardware address {mac:?} does not look like a MAC; using {id:?} as gateway ID");
    }
    id
}
