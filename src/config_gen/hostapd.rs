//! Access-point daemon configuration.
//!
//! The network name is the gateway ID and the passphrase its lower-cased
//! form; every other setting is fixed.

// Fixed; GWCONF_LOCAL_INTERFACE only feeds the gateway agent config
const INTERFACE: &str = "wlan0";
const CHANNEL: u8 = 6;

pub fn hostapd_lines(gateway_id: &str) -> Vec<String> {
    vec![
        format!("interface={INTERFACE}"),
        format!("ssid={gateway_id}"),
        "hw_mode=g".to_string(),
        format!("channel={CHANNEL}"),
        "macaddr_acl=0".to_string(),
        // Open system authentication
        "auth_algs=1".to_string(),
        "ignore_broadcast_ssid=0".to_string(),
        String::new(),
        "wpa=2".to_string(),
        format!("wpa_passphrase={}", gateway_id.to_lowercase()),
        "wpa_key_mgmt=WPA-PSK".to_string(),
        "wpa_pairwise=TKIP".to_string(),
        "rsn_pairwise=CCMP".to_string(),
    ]
}

pub fn render(gateway_id: &str) -> String {
    hostapd_lines(gateway_id).join("\n")
}
