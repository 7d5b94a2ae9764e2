pub const LOG_LEVEL: &str = "info";

pub const LOCAL_INTERFACE: &str = "wlan0";
pub const OUTBOUND_INTERFACE: &str = "eth0";
pub const BASELINE_CONFIG_PATH: &str = "/etc/gateway-agent/baseline.json";

pub const MQTT_PORT: u16 = 1883;
pub const MQTT_PROTOCOL: &str = "mqtt";
