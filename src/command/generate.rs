use std::path::PathBuf;

use anyhow::{anyhow, Result};

use gwconf::{ConfigGenerator, GenerateError};

#[derive(Debug, Clone, Copy)]
pub enum Artifact {
    Hostapd,
    GatewayAgent,
    All,
}

pub async fn generate(artifact: Artifact) -> Result<()> {
    let generator = ConfigGenerator::from_env()?;
    match artifact {
        Artifact::Hostapd => {
            let path = generator.generate_hostapd_config().await?;
            println!("{}", path.display());
        }
        Artifact::GatewayAgent => {
            let path = generator.generate_gateway_agent_config().await?;
            println!("{}", path.display());
        }
        Artifact::All => {
            let generated = generator.generate_all().await;
            let failed = [
                report("hostapd", &generated.hostapd),
                report("gateway-agent", &generated.gateway_agent),
            ]
            .into_iter()
            .filter(|ok| !ok)
            .count();
            if failed > 0 {
                return Err(anyhow!("{failed} of 2 configs could not be generated"));
            }
        }
    }
    Ok(())
}

fn report(name: &str, result: &Result<PathBuf, GenerateError>) -> bool {
    match result {
        Ok(path) => {
            println!("{}", path.display());
            true
        }
        Err(e) => {
            eprintln!("{name}: {e}");
            false
        }
    }
}
