pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_FILE: &str = "GWCONF_ENV_FILE";

pub const LOCAL_GATEWAY_ADDRESS: &str = "GWCONF_LOCAL_GATEWAY_ADDRESS";
pub const LOCAL_INTERFACE: &str = "GWCONF_LOCAL_INTERFACE";
pub const OUTBOUND_INTERFACE: &str = "GWCONF_OUTBOUND_INTERFACE";
pub const BASELINE_CONFIG_PATH: &str = "GWCONF_BASELINE_CONFIG";
pub const PLATFORM: &str = "GWCONF_PLATFORM";

// Per-target path overrides are named GWCONF_<TARGET>_PATH_<PLATFORM>
pub const PATH_OVERRIDE_PREFIX: &str = "GWCONF_";
