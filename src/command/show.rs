use anyhow::Result;

use gwconf::helpers::settings::Settings;
use gwconf::interfaces::platform_path::ConfigTarget;
use gwconf::ConfigGenerator;

pub async fn gateway_id() -> Result<()> {
    let generator = ConfigGenerator::from_env()?;
    println!("{}", generator.gateway_id().await?);
    Ok(())
}

/// Prints where each target would be written on this platform.
pub fn paths() -> Result<()> {
    let settings = Settings::from_env();
    for target in ConfigTarget::ALL {
        match settings.paths.resolve(target, &settings.platform) {
            Ok(path) => println!("{target}\t{}", path.display()),
            Err(e) => println!("{target}\tunsupported: {e}"),
        }
    }
    Ok(())
}
