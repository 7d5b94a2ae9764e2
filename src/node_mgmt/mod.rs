pub mod gateway_id;

pub use gateway_id::{normalize_mac, GatewayIdResolver};
