mod command;

use anyhow::{anyhow, Result};
use env_logger::Env;

use command::Artifact;
use gwconf::constants::{defaults, envvars};
use gwconf::helpers::load_dotenv;

const CMD_HOSTAPD: &str = "hostapd";
const CMD_GATEWAY_AGENT: &str = "gateway-agent";
const CMD_ALL: &str = "all";
const CMD_GATEWAY_ID: &str = "gateway-id";
const CMD_PATHS: &str = "paths";

#[tokio::main]
async fn main() -> Result<()> {
    let loaded = load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
    for path in loaded {
        log::debug!("Loaded {}", path.display());
    }

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_HOSTAPD) => command::generate(Artifact::Hostapd).await,
        Some(CMD_GATEWAY_AGENT) => command::generate(Artifact::GatewayAgent).await,
        Some(CMD_ALL) => command::generate(Artifact::All).await,
        Some(CMD_GATEWAY_ID) => command::gateway_id().await,
        Some(CMD_PATHS) => command::paths(),
        _ => Err(anyhow!(
            "Subcommand must be one of '{CMD_HOSTAPD}', '{CMD_GATEWAY_AGENT}', '{CMD_ALL}', '{CMD_GATEWAY_ID}', '{CMD_PATHS}'"
        )),
    }
}
