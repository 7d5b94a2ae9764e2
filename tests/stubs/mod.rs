#![allow(dead_code)]
// Not every test file uses every stub

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use gwconf::helpers::settings::Settings;
use gwconf::interfaces::config_file::{ConfigFs, LocalFs};
use gwconf::interfaces::hwaddr::{HwAddrError, HwAddrLookup};
use gwconf::interfaces::platform_path::{ConfigTarget, PathTable, LINUX};

pub const GATEWAY_ADDRESS: &str = "192.168.4.1";

/// Returns a fixed MAC and counts lookups.
pub struct FixedMac {
    mac: String,
    pub calls: AtomicUsize,
}

impl FixedMac {
    pub fn new(mac: &str) -> Arc<Self> {
        Arc::new(FixedMac {
            mac: mac.to_string(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HwAddrLookup for FixedMac {
    async fn mac_address(&self, _interface_name: &str) -> Result<String, HwAddrError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(10)).await;
        Ok(self.mac.clone())
    }
}

/// Local filesystem that counts writes.
#[derive(Default)]
pub struct RecordingFs {
    writes: AtomicUsize,
}

impl RecordingFs {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigFs for RecordingFs {
    async fn dir_exists(&self, path: &Path) -> bool {
        LocalFs.dir_exists(path).await
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        LocalFs.read(path).await
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        LocalFs.write(path, contents).await
    }
}

/// Scratch layout: `<root>/baseline.json`, `<root>/hostapd/hostapd.conf`
/// and `<root>/agent/config.json`. The output directories are created.
pub struct Scratch {
    pub dir: tempfile::TempDir,
}

impl Scratch {
    pub fn new(baseline: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("baseline.json"), baseline).unwrap();
        std::fs::create_dir(dir.path().join("hostapd")).unwrap();
        std::fs::create_dir(dir.path().join("agent")).unwrap();
        Scratch { dir }
    }

    pub fn hostapd_path(&self) -> PathBuf {
        self.dir.path().join("hostapd/hostapd.conf")
    }

    pub fn agent_path(&self) -> PathBuf {
        self.dir.path().join("agent/config.json")
    }

    pub fn settings(&self) -> Settings {
        let mut paths = PathTable::empty();
        paths.insert(ConfigTarget::HostapdConf, LINUX, self.hostapd_path());
        paths.insert(ConfigTarget::GatewayAgentConf, LINUX, self.agent_path());
        Settings {
            local_gateway_address: GATEWAY_ADDRESS.to_string(),
            local_interface: "wlan0".to_string(),
            outbound_interface: "eth0".to_string(),
            baseline_config_path: self.dir.path().join("baseline.json"),
            platform: LINUX.to_string(),
            paths,
        }
    }
}
